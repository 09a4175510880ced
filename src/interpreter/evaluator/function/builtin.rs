use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            host::Host,
            utils::{argument_type_error, single_argument},
        },
        lexer::Position,
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64_checked, usize_to_i64_checked},
};

/// Returns the length of a string, list or record.
///
/// Strings are measured in characters, records in entries.
///
/// # Example
/// ```
/// use nixi::interpreter::{
///     evaluator::{function::builtin::len, host::Host},
///     lexer::Position,
///     value::core::Value,
/// };
///
/// let mut host = Host::stdio();
/// let result = len(&[Value::from("héllo")], &mut host, Position::new(1, 1)).unwrap();
///
/// assert_eq!(result, Value::Integer(5));
/// ```
pub fn len(args: &[Value], _host: &mut Host, pos: Position) -> EvalResult<Value> {
    let length = match single_argument("len", args, pos)? {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Record(entries) => entries.len(),
        other => return Err(argument_type_error("len", other, pos)),
    };
    Ok(Value::Integer(usize_to_i64_checked(length, pos)?))
}

/// Converts any value to its display string.
pub fn str(args: &[Value], _host: &mut Host, pos: Position) -> EvalResult<Value> {
    let value = single_argument("str", args, pos)?;
    Ok(Value::Str(value.to_string()))
}

/// Converts a value to an integer.
///
/// - Reals are truncated toward zero.
/// - Strings are parsed after trimming surrounding whitespace.
/// - `true` and `false` become `1` and `0`.
///
/// # Example
/// ```
/// use nixi::interpreter::{
///     evaluator::{function::builtin::int, host::Host},
///     lexer::Position,
///     value::core::Value,
/// };
///
/// let mut host = Host::stdio();
/// let pos = Position::new(1, 1);
///
/// assert_eq!(int(&[Value::Real(-3.9)], &mut host, pos).unwrap(), Value::Integer(-3));
/// assert_eq!(int(&[Value::from(" 42 ")], &mut host, pos).unwrap(), Value::Integer(42));
/// assert!(int(&[Value::from("4.2")], &mut host, pos).is_err());
/// ```
pub fn int(args: &[Value], _host: &mut Host, pos: Position) -> EvalResult<Value> {
    match single_argument("int", args, pos)? {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Real(r) => Ok(Value::Integer(f64_to_i64_truncated(*r, pos)?)),
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        Value::Str(s) => s.trim().parse::<i64>().map(Value::Integer).map_err(|_| {
                                  RuntimeError::InvalidArgument { details:  format!("invalid literal for int(): '{s}'"),
                                                                  position: pos, }
                              }),
        other => Err(argument_type_error("int", other, pos)),
    }
}

/// Converts a value to a real.
///
/// Integers must be exactly representable as `f64`.
pub fn float(args: &[Value], _host: &mut Host, pos: Position) -> EvalResult<Value> {
    match single_argument("float", args, pos)? {
        Value::Integer(n) => {
            Ok(Value::Real(i64_to_f64_checked(*n, RuntimeError::Overflow { position: pos })?))
        },
        Value::Real(r) => Ok(Value::Real(*r)),
        Value::Bool(b) => Ok(Value::Real(f64::from(u8::from(*b)))),
        Value::Str(s) => s.trim().parse::<f64>().map(Value::Real).map_err(|_| {
                                  RuntimeError::InvalidArgument { details:  format!("could not convert string to float: '{s}'"),
                                                                  position: pos, }
                              }),
        other => Err(argument_type_error("float", other, pos)),
    }
}

/// Fails unless its argument is `true`.
///
/// # Returns
/// `Value::Bool(true)` when the assertion holds.
///
/// # Example
/// ```
/// use nixi::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::{function::builtin::assert_fn, host::Host},
///         lexer::Position,
///         value::core::Value,
///     },
/// };
///
/// let mut host = Host::stdio();
/// let pos = Position::new(2, 1);
///
/// assert!(assert_fn(&[Value::Bool(true)], &mut host, pos).is_ok());
/// assert_eq!(assert_fn(&[Value::Integer(1)], &mut host, pos),
///            Err(RuntimeError::AssertionFailed { position: pos }));
/// ```
pub fn assert_fn(args: &[Value], _host: &mut Host, pos: Position) -> EvalResult<Value> {
    match single_argument("assert", args, pos)? {
        Value::Bool(true) => Ok(Value::Bool(true)),
        _ => Err(RuntimeError::AssertionFailed { position: pos }),
    }
}
