use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use nixi::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// ## Errors
/// Returns `InvalidArgument` for NaN and infinities, and `Overflow` when the
/// truncated value does not fit in an `i64`.
///
/// ## Example
/// ```
/// use nixi::{
///     error::RuntimeError,
///     interpreter::lexer::Position,
///     util::num::f64_to_i64_truncated,
/// };
///
/// let pos = Position::new(1, 1);
///
/// assert_eq!(f64_to_i64_truncated(-2.7, pos).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(1e20, pos).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, pos: Position) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::InvalidArgument { details:  format!("cannot convert {value:?} to int"),
                                                   position: pos, });
    }
    let truncated = value.trunc();
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { position: pos });
    }
    Ok(truncated as i64)
}

/// Converts a `usize` such as a length to `i64`.
///
/// ## Errors
/// Returns `Overflow` if the value does not fit.
pub fn usize_to_i64_checked(value: usize, pos: Position) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { position: pos })
}

/// Compares an integer with a real without rounding either side.
///
/// The real is equal only if it is integral, lies inside the `i64` range and
/// names exactly the same integer.
///
/// ## Example
/// ```
/// use nixi::util::num::i64_equals_f64;
///
/// assert!(i64_equals_f64(2, 2.0));
/// assert!(!i64_equals_f64(2, 2.5));
/// assert!(!i64_equals_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::float_cmp)]
pub fn i64_equals_f64(integer: i64, real: f64) -> bool {
    real.fract() == 0.0
    && real >= i64::MIN as f64
    && real < i64::MAX as f64
    && integer == real as i64
}
