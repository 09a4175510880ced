/// Closure support.
///
/// Defines the `Closure` type produced by function definitions and the
/// `Scope` it captures. A closure owns a copy of the scope that was current
/// when the function was defined.
pub mod closure;

pub mod core;
