use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{binary::parse_pipe, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many brackets, braces and parentheses may be open at once.
pub const MAX_NESTING: usize = 128;

/// Parses a complete token sequence into a program.
///
/// Statements are parsed until the end-of-input marker produced by the
/// tokenizer.
///
/// # Errors
/// Returns the first [`ParseError`] encountered, `NestingTooDeep` when more
/// than [`MAX_NESTING`] delimiters are open at once, or
/// `UnexpectedEndOfInput` when the sequence lacks its end marker.
///
/// # Example
/// ```
/// use nixi::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("let x = 1; x + 2").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, Position)]) -> ParseResult<Vec<Statement>> {
    check_nesting(tokens)?;

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        match iter.peek() {
            Some((Token::Eof, _)) => break,
            Some(_) => statements.push(parse_statement(&mut iter)?),
            None => {
                let position = tokens.last().map_or_else(Position::default, |(_, pos)| *pos);
                return Err(ParseError::UnexpectedEndOfInput { position });
            },
        }
    }

    Ok(statements)
}

/// Rejects token sequences whose delimiters nest deeper than
/// [`MAX_NESTING`].
///
/// Every recursive grammar rule passes through a delimiter, so this bounds
/// the recursion depth of the parser. Unbalanced closers are left for the
/// grammar to report.
fn check_nesting(tokens: &[(Token, Position)]) -> ParseResult<()> {
    let mut depth = 0_usize;

    for (token, position) in tokens {
        match token {
            Token::LParen | Token::LBracket | Token::LBrace => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { position: *position });
                }
            },
            Token::RParen | Token::RBracket | Token::RBrace => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the pipe, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := pipe`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    parse_pipe(tokens)
}
