use std::fmt;

use logos::Logos;
use ordered_float::OrderedFloat;

use crate::{
    error::LexError,
    interpreter::keyword::{self, Keyword},
};

/// A 1-based line and column in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a lexical token in the source input.
///
/// Keyword and widget variants are never matched by the generated lexer
/// directly: every word is scanned as [`Token::Identifier`] and then
/// reclassified through [`keyword::classify`], so the reserved-word and widget
/// tables stay the single source of truth.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Fractional literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(OrderedFloat<f64>),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Quoted string literal, with either `'` or `"`.
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    Str(String),
    /// Identifier tokens such as `greet` or `on-click`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A reserved word.
    Keyword(Keyword),
    /// A widget keyword, carrying its kind tag.
    Widget(&'static str),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// `->`
    #[token("->")]
    Arrow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks, recorded for position tracking.
    #[token("\n", |lex| {
        let next_line = lex.span().end;
        lex.extras.new_line(next_line);
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End-of-input marker appended by [`tokenize`].
    Eof,
}

impl Token {
    /// Returns the word spelled by an identifier, keyword or widget token.
    ///
    /// Attribute names accept any word, so `label: "Hi"` is valid even
    /// though `label` is a widget keyword.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Keyword(keyword) => Some(keyword.as_str()),
            Self::Widget(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Real(value) => return write!(f, "number `{:?}`", value.0),
            Self::Integer(value) => return write!(f, "integer `{value}`"),
            Self::Str(value) => return write!(f, "string {value:?}"),
            Self::Identifier(name) => return write!(f, "identifier `{name}`"),
            Self::Keyword(keyword) => return write!(f, "keyword `{}`", keyword.as_str()),
            Self::Widget(kind) => return write!(f, "widget `{kind}`"),
            Self::Eof => return write!(f, "end of input"),
            Self::EqualEqual => "==",
            Self::Assign => "=",
            Self::Arrow => "->",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Pipe => "|",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        write!(f, "`{symbol}`")
    }
}

/// Why the generated lexer rejected a piece of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token matches the character at this position.
    #[default]
    UnexpectedCharacter,
    /// A quoted literal reached the end of input.
    UnterminatedString,
    /// An integer literal does not fit in 64 bits.
    IntegerTooLarge,
    /// A real literal overflows to infinity.
    RealTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Records the byte offset at which every line starts so that any token,
/// including one spanning several lines, can be mapped back to a line and
/// column. The last mapped offset is remembered so that columns on one long
/// line are counted only once.
#[derive(Debug)]
pub struct LexerExtras {
    line_starts: Vec<usize>,
    last:        (usize, Position),
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line_starts: vec![0],
               last:        (0, Position::new(1, 1)), }
    }
}

impl LexerExtras {
    /// Records that a new line begins at byte `offset`.
    fn new_line(&mut self, offset: usize) {
        self.line_starts.push(offset);
    }

    /// Maps a byte offset of `source` to its line and column.
    pub fn position_of(&mut self, source: &str, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset).max(1);
        let (last_offset, last_position) = self.last;
        let (start, column) = if last_position.line == line && last_offset <= offset {
            (last_offset, last_position.column)
        } else {
            (self.line_starts[line - 1], 1)
        };

        let column = column + source.get(start..offset).map_or(0, |text| text.chars().count());
        let position = Position::new(line, column);
        self.last = (offset, position);
        position
    }
}

/// Converts raw source text into tokens paired with their positions.
///
/// The returned sequence always ends with [`Token::Eof`] positioned at the
/// end of the input.
///
/// # Errors
/// Returns a [`LexError`] for an unrecognized character, an unterminated
/// string literal, an integer literal too large for 64 bits or a real literal
/// too large to be finite.
///
/// # Example
/// ```
/// use nixi::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x == 2").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::EqualEqual,
///                 Token::Integer(2),
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let position = lexer.extras.position_of(source, start);
        match token {
            Ok(Token::Identifier(word)) => tokens.push((keyword::classify(word), position)),
            Ok(tok) => tokens.push((tok, position)),
            Err(kind) => return Err(LexError::from_kind(kind, lexer.slice(), position)),
        }
    }

    let end = lexer.extras.position_of(source, source.len());
    tokens.push((Token::Eof, end));

    Ok(tokens)
}

/// Parses a fractional literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<OrderedFloat<f64>, LexErrorKind> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
       .map(OrderedFloat)
       .ok_or(LexErrorKind::RealTooLarge)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Scans a quoted literal after its opening quote.
///
/// A backslash escapes only the quote character that opened the literal;
/// any other backslash is kept as written.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let quote = if lex.slice() == "'" { '\'' } else { '"' };
    let body = lex.remainder();
    let body_start = lex.span().end;

    let mut value = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if ch == quote {
            lex.bump(offset + ch.len_utf8());
            return Ok(value);
        }
        if ch == '\\'
           && let Some(&(_, next)) = chars.peek()
           && next == quote
        {
            chars.next();
            value.push(quote);
            continue;
        }
        if ch == '\n' {
            lex.extras.new_line(body_start + offset + 1);
        }
        value.push(ch);
    }

    lex.bump(body.len());
    Err(LexErrorKind::UnterminatedString)
}
