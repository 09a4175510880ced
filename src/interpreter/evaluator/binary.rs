/// Equality comparison.
pub mod comparison;
/// Operator dispatch.
pub mod core;
/// Integer and real arithmetic.
pub mod scalar;
/// String and list concatenation and repetition.
pub mod sequence;
