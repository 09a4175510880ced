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
};

/// Runs a shell command and returns its standard output as a string.
///
/// The exit status of the command is not inspected.
///
/// # Errors
/// Returns a `TypeError` if the argument is not a string and
/// `CommandFailed` if the command could not be started.
pub fn run(args: &[Value], host: &mut Host, pos: Position) -> EvalResult<Value> {
    let command = match single_argument("run", args, pos)? {
        Value::Str(command) => command,
        other => return Err(argument_type_error("run", other, pos)),
    };

    host.runner
        .run(command)
        .map(Value::Str)
        .map_err(|e| RuntimeError::CommandFailed { command:  command.clone(),
                                                   details:  e.to_string(),
                                                   position: pos, })
}
