use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, statement::parse_statement, utils::expect},
    },
};

/// Parses a block of statements delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; reaching the end of input first is an
/// error reported by the statement parser.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// All statements of the block, in order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
