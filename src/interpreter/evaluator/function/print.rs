use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::{core::EvalResult, host::Host}, lexer::Position, value::core::Value},
};

/// Writes its arguments to the host output and returns nothing.
///
/// Arguments are formatted with their `Display` implementation, separated by
/// single spaces and followed by a newline. With no arguments an empty line
/// is written.
///
/// # Example
/// ```
/// use nixi::interpreter::{
///     evaluator::{
///         function::print::echo,
///         host::{Host, ShellRunner},
///     },
///     lexer::Position,
///     value::core::Value,
/// };
///
/// // The output goes to a sink here; the doctest only checks the result.
/// let mut host = Host::new(Box::new(std::io::sink()), Box::new(ShellRunner));
/// let result = echo(&[Value::from("x ="), Value::Integer(42)], &mut host, Position::new(1, 1));
///
/// assert_eq!(result.unwrap(), Value::Absent);
/// ```
pub fn echo(args: &[Value], host: &mut Host, pos: Position) -> EvalResult<Value> {
    let line = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(host.output, "{line}").map_err(|e| RuntimeError::Output { details:  e.to_string(),
                                                                       position: pos, })?;
    Ok(Value::Absent)
}
