use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the reference appears.
        position: Position,
    },
    /// Called a function name that is not bound in scope.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call appears.
        position: Position,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Where the error occurred.
        position: Position,
    },
    /// Called a name bound to something other than a function.
    NotCallable {
        /// The name used as a callee.
        name:      String,
        /// Type of the value bound to that name.
        type_name: &'static str,
        /// Where the call appears.
        position:  Position,
    },
    /// Divided by zero.
    DivisionByZero {
        /// Where the division appears.
        position: Position,
    },
    /// Integer arithmetic left the 64-bit range, or a repeated string or
    /// list grew too long.
    Overflow {
        /// Where the operation appears.
        position: Position,
    },
    /// A builtin received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The builtin's name.
        name:     String,
        /// The accepted argument counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// Where the call appears.
        position: Position,
    },
    /// An argument had the right type but an unusable value.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// Where the call appears.
        position: Position,
    },
    /// The external command run by `run` could not be executed.
    CommandFailed {
        /// The command line.
        command:  String,
        /// Why it failed.
        details:  String,
        /// Where the call appears.
        position: Position,
    },
    /// `assert` received something other than `true`.
    AssertionFailed {
        /// Where the call appears.
        position: Position,
    },
    /// Writing builtin output failed.
    Output {
        /// The underlying I/O error message.
        details:  String,
        /// Where the call appears.
        position: Position,
    },
    /// Evaluation nested deeper than the interpreter allows, usually through
    /// runaway recursion.
    RecursionLimit {
        /// The expression being evaluated when the limit was hit.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::TypeError { position, .. }
            | Self::NotCallable { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::InvalidArgument { position, .. }
            | Self::CommandFailed { position, .. }
            | Self::AssertionFailed { position }
            | Self::Output { position, .. }
            | Self::RecursionLimit { position } => *position,
        }
    }

    /// Whether this error reports an unresolved name.
    #[must_use]
    pub const fn is_name_error(&self) -> bool {
        matches!(self, Self::UnknownVariable { .. } | Self::UnknownFunction { .. })
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error on {position}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error on {position}: Unknown function '{name}'.")
            },
            Self::TypeError { details, position } => {
                write!(f, "Error on {position}: Type error: {details}.")
            },
            Self::NotCallable { name,
                                type_name,
                                position, } => write!(f,
                                                      "Error on {position}: '{name}' is a {type_name}, not a function."),
            Self::DivisionByZero { position } => {
                write!(f, "Error on {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error on {position}: Overflow while trying to compute result."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error on {position}: '{name}' takes {expected} argument(s) but {found} were given."),
            Self::InvalidArgument { details, position } => {
                write!(f, "Error on {position}: Invalid argument: {details}.")
            },
            Self::CommandFailed { command,
                                  details,
                                  position, } => {
                write!(f, "Error on {position}: Command '{command}' failed: {details}.")
            },
            Self::AssertionFailed { position } => {
                write!(f, "Error on {position}: Assertion failed.")
            },
            Self::Output { details, position } => {
                write!(f, "Error on {position}: Could not write output: {details}.")
            },
            Self::RecursionLimit { position } => {
                write!(f, "Error on {position}: Maximum recursion depth exceeded.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
