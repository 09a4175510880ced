use crate::interpreter::lexer::{LexErrorKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A quoted literal without its closing quote.
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// An integer literal that does not fit in 64 bits.
    IntegerTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// A real literal too large to represent as a finite 64-bit float.
    RealTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Builds a lexer error from the generated lexer's error kind and the
    /// slice it stopped on.
    pub(crate) fn from_kind(kind: LexErrorKind, slice: &str, position: Position) -> Self {
        match kind {
            LexErrorKind::UnexpectedCharacter => {
                Self::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                            position }
            },
            LexErrorKind::UnterminatedString => Self::UnterminatedString { position },
            LexErrorKind::IntegerTooLarge => Self::IntegerTooLarge { literal: slice.to_string(),
                                                                     position },
            LexErrorKind::RealTooLarge => Self::RealTooLarge { literal: slice.to_string(),
                                                               position },
        }
    }

    /// Returns where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::IntegerTooLarge { position, .. }
            | Self::RealTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error on {position}: Unexpected character {character:?}.")
            },
            Self::UnterminatedString { position } => {
                write!(f, "Error on {position}: Unterminated string literal.")
            },
            Self::IntegerTooLarge { literal, position } => {
                write!(f, "Error on {position}: Integer literal {literal} is too large.")
            },
            Self::RealTooLarge { literal, position } => {
                write!(f, "Error on {position}: Real literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
