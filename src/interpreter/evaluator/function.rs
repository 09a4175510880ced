/// Built-in function implementations.
///
/// Contains the value inspection and coercion builtins: `len`, `str`, `int`,
/// `float` and `assert`.
pub mod builtin;
/// The `echo` function implementation.
///
/// Writes values to the host output.
pub mod print;
/// The `run` function implementation.
///
/// Runs a shell command through the host and returns its captured output.
pub mod run;

pub mod core;
