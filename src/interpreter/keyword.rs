use crate::{interpreter::lexer::Token, widget};

/// A reserved word of the language.
///
/// `if`, `then`, `else` and `import` are reserved but have no grammar rule;
/// the parser rejects them wherever they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `func`
    Func,
    /// `let`
    Let,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `gui`
    Gui,
    /// `window`
    Window,
    /// `import`
    Import,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,
}

/// The reserved-word table.
pub const KEYWORDS: &[(&str, Keyword)] = &[("func", Keyword::Func),
                                           ("let", Keyword::Let),
                                           ("if", Keyword::If),
                                           ("then", Keyword::Then),
                                           ("else", Keyword::Else),
                                           ("gui", Keyword::Gui),
                                           ("window", Keyword::Window),
                                           ("import", Keyword::Import),
                                           ("return", Keyword::Return),
                                           ("true", Keyword::True),
                                           ("false", Keyword::False)];

impl Keyword {
    /// Returns the source spelling of the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        KEYWORDS.iter()
                .find(|(_, keyword)| *keyword == self)
                .map_or("", |(text, _)| text)
    }
}

/// Turns a scanned word into its final token.
///
/// Reserved words become [`Token::Keyword`], widget keywords become
/// [`Token::Widget`] carrying their kind tag, and everything else stays an
/// identifier.
///
/// # Example
/// ```
/// use nixi::interpreter::{
///     keyword::{Keyword, classify},
///     lexer::Token,
/// };
///
/// assert_eq!(classify("let".to_string()), Token::Keyword(Keyword::Let));
/// assert_eq!(classify("button".to_string()), Token::Widget("button"));
/// assert_eq!(classify("counter".to_string()), Token::Identifier("counter".to_string()));
/// ```
#[must_use]
pub fn classify(word: String) -> Token {
    if let Some((_, keyword)) = KEYWORDS.iter().find(|(text, _)| *text == word) {
        return Token::Keyword(*keyword);
    }
    if let Some(spec) = widget::lookup(&word) {
        return Token::Widget(spec.keyword);
    }
    Token::Identifier(word)
}
