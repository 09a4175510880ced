/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss. The `int` and `float`
/// builtins and mixed integer/real arithmetic go through these helpers.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range or not finite.
pub mod num;
