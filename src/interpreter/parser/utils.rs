use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::ParseResult,
    },
};

/// Builds an `UnexpectedToken` error.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: &Token,
                                                 position: Position)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found: found.to_string(),
                                  position }
}

/// Returns the position of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_position<'a, I>(tokens: &mut Peekable<I>) -> Position
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.peek().map_or_else(Position::default, |(_, pos)| *pos)
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming both the expected and the found token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, pos)) if tok == expected => Ok(*pos),
        Some((tok, pos)) => Err(unexpected(&expected.to_string(), tok, *pos)),
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Consumes a statement separator if one follows.
pub(in crate::interpreter::parser) fn skip_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, argument lists, parameter lists
/// and GUI attribute lists. The opening delimiter must already be consumed.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list (a trailing comma is accepted), or
/// - the specified closing token, to end it.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than
/// `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut items = Vec::new();
    loop {
        if let Some((tok, _)) = tokens.peek()
           && tok == closing
        {
            tokens.next();
            break;
        }
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, pos)) => {
                return Err(unexpected(&format!("`,` or {closing}"), tok, *pos));
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), pos)) => Ok((name.clone(), *pos)),
        Some((tok, pos)) => Err(unexpected("an identifier", tok, *pos)),
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Parses any word: an identifier, a keyword or a widget keyword.
///
/// Attribute names use this so that reserved words such as `label` can name
/// attributes.
///
/// # Errors
/// Returns a `ParseError` naming `what` if the next token is not a word.
pub(in crate::interpreter::parser) fn parse_word<'a, I>(tokens: &mut Peekable<I>,
                                                        what: &str)
                                                        -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, pos)) => tok.word()
                               .map(str::to_string)
                               .ok_or_else(|| unexpected(what, tok, *pos)),
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}
