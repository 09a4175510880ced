use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Where the unexpected token starts.
        position: Position,
    },
    /// Call syntax applied to something other than a bare identifier, such
    /// as `config.handler()`.
    InvalidCallTarget {
        /// Position of the opening parenthesis.
        position: Position,
    },
    /// The token sequence ended without an end-of-input marker.
    UnexpectedEndOfInput {
        /// Position of the last token seen.
        position: Position,
    },
    /// Too many parentheses, brackets or braces were open at once.
    NestingTooDeep {
        /// Position of the opening delimiter past the limit.
        position: Position,
    },
}

impl ParseError {
    /// Returns where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::InvalidCallTarget { position }
            | Self::UnexpectedEndOfInput { position }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error on {position}: Expected {expected}, found {found}.")
            },
            Self::InvalidCallTarget { position } => write!(f,
                                                           "Error on {position}: Only a plain function name can be called."),
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error on {position}: Unexpected end of input.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Error on {position}: Delimiters are nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
