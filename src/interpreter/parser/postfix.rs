use std::iter::Peekable;

use crate::{
    ast::{Attributes, Expr, Number, insert_attribute},
    error::ParseError,
    interpreter::{
        keyword::Keyword,
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_word, skip_semicolon, unexpected},
        },
    },
};

/// Parses postfix operators applied to a primary expression.
///
/// Two postfix forms may be chained in any order:
///
/// 1. **Attribute access** `expr.name`
/// 2. **Function calls** `name(arg, ...)`
///
/// A call is only valid directly on a bare identifier. The callee is stored
/// by name, so `config.handler()` and `f()()` are rejected.
///
/// Grammar:
/// ```text
///     postfix := primary ("." word | "(" arguments ")")*
/// ```
///
/// # Errors
/// Returns `ParseError::InvalidCallTarget` for call syntax on anything other
/// than an identifier, or any error from the primary or argument parsers.
pub(crate) fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut node = parse_primary(tokens)?;
    loop {
        match tokens.peek() {
            Some((Token::Dot, pos)) => {
                let pos = *pos;
                tokens.next();
                let attribute = parse_word(tokens, "an attribute name")?;
                node = Expr::AttrAccess { object: Box::new(node),
                                          attribute,
                                          pos };
            },
            Some((Token::LParen, pos)) => {
                let Expr::Identifier { name, pos: callee } = node else {
                    return Err(ParseError::InvalidCallTarget { position: *pos });
                };
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::Call { name,
                                    arguments,
                                    pos: callee };
            },
            _ => break,
        }
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := INTEGER | REAL | STRING | "true" | "false"
///              | IDENTIFIER
///              | "(" expression ")"
///              | "{" (word "=" expression ";"?)* "}"
///              | "[" elements "]"
/// ```
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let Some((tok, pos)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: Position::default() });
    };
    let pos = *pos;

    match tok {
        Token::Integer(n) => Ok(Expr::Number { value: Number::Integer(*n),
                                               pos }),
        Token::Real(r) => Ok(Expr::Number { value: Number::Real(*r),
                                            pos }),
        Token::Str(s) => Ok(Expr::Str { value: s.clone(),
                                        pos }),
        Token::Keyword(Keyword::True) => Ok(Expr::Bool { value: true, pos }),
        Token::Keyword(Keyword::False) => Ok(Expr::Bool { value: false, pos }),
        Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone(),
                                                         pos }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Token::LBrace => parse_attr_set(tokens, pos),
        Token::LBracket => {
            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::List { elements, pos })
        },
        other => Err(unexpected("an expression", other, pos)),
    }
}

/// Parses the entries of an attribute-set literal after its `{`.
///
/// Entries have the form `name = expression`, each optionally followed by
/// `;`. A repeated name keeps its first position and takes the last value.
///
/// Grammar: `attr_set := "{" (word "=" expression ";"?)* "}"`
fn parse_attr_set<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut attributes = Attributes::new();
    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }
        let name = parse_word(tokens, "an attribute name or `}`")?;
        expect(tokens, &Token::Assign)?;
        let value = parse_expression(tokens)?;
        insert_attribute(&mut attributes, name, value);
        skip_semicolon(tokens);
    }
    Ok(Expr::AttrSet { attributes, pos })
}
