use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        keyword::Keyword,
        lexer::{Position, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            gui::parse_gui,
            utils::{expect, parse_comma_separated, parse_identifier, peek_position, skip_semicolon},
        },
    },
};

/// Parses a single statement.
///
/// The leading token selects the statement kind:
/// - `let` starts a variable binding,
/// - `func` starts a function definition,
/// - `gui` starts a GUI definition,
/// - `return` starts a return statement,
/// - anything else is parsed as an expression statement.
///
/// Every statement may be followed by a single optional `;`.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let statement = match tokens.peek() {
        Some((Token::Keyword(Keyword::Let), _)) => parse_variable_binding(tokens)?,
        Some((Token::Keyword(Keyword::Func), _)) => {
            Statement::Function(parse_function_definition(tokens)?)
        },
        Some((Token::Keyword(Keyword::Gui), _)) => Statement::Gui(parse_gui(tokens)?),
        Some((Token::Keyword(Keyword::Return), _)) => parse_return(tokens)?,
        _ => {
            let pos = peek_position(tokens);
            let expr = parse_expression(tokens)?;
            Statement::Expression { expr, pos }
        },
    };

    skip_semicolon(tokens);
    Ok(statement)
}

/// Parses a variable binding of the form `let <identifier> = <expression>`.
///
/// # Errors
/// Returns a `ParseError` if the name is not an identifier, `=` is missing
/// or the expression is malformed.
fn parse_variable_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let pos = expect(tokens, &Token::Keyword(Keyword::Let))?;
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Let { name, value, pos })
}

/// Parses a function definition of the form
/// `func <name>(param1, param2, ...) { <statements> }`.
///
/// # Errors
/// Returns a `ParseError` if the name or a parameter is not an identifier,
/// a delimiter is missing, or a body statement fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<FunctionDef>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let pos = expect(tokens, &Token::Keyword(Keyword::Func))?;
    let (name, _) = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens).map(|(param, _)| param),
                                       &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(FunctionDef { name,
                     params,
                     body,
                     pos })
}

/// Parses `return <expression>`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let pos = expect(tokens, &Token::Keyword(Keyword::Return))?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Return { value, pos })
}
