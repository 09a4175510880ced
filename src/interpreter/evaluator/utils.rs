use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::core::Value},
};

/// Returns the only argument of a one-argument builtin.
///
/// # Errors
/// Returns `ArgumentCountMismatch` unless `args` holds exactly one value.
///
/// # Example
/// ```
/// use nixi::interpreter::{evaluator::utils::single_argument, lexer::Position, value::core::Value};
///
/// let pos = Position::new(1, 1);
/// let args = [Value::Integer(3)];
///
/// assert_eq!(single_argument("len", &args, pos).unwrap(), &Value::Integer(3));
/// assert!(single_argument("len", &[], pos).is_err());
/// ```
pub fn single_argument<'a>(name: &str, args: &'a [Value], pos: Position) -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                       expected: "1".to_string(),
                                                       found:    args.len(),
                                                       position: pos, }),
    }
}

/// Builds the `TypeError` for a builtin applied to a value of the wrong type.
pub(crate) fn argument_type_error(name: &str, value: &Value, pos: Position) -> RuntimeError {
    RuntimeError::TypeError { details:  format!("{name}() does not accept a {} argument",
                                                value.type_name()),
                              position: pos, }
}
