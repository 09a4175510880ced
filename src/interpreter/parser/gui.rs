use std::iter::Peekable;

use crate::{
    ast::{Attributes, Expr, GuiDef, GuiElement, WidgetElement, WindowElement, insert_attribute},
    error::ParseError,
    interpreter::{
        keyword::Keyword,
        lexer::{Position, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                expect, parse_comma_separated, parse_identifier, parse_word, skip_semicolon,
                unexpected,
            },
        },
    },
};

/// Parses a GUI definition.
///
/// Grammar:
/// ```text
///     gui_def := "gui" NAME "{" element* "}"
///     element := window | widget
/// ```
///
/// # Errors
/// Returns a `ParseError` if the name is missing, a delimiter is missing, or
/// an element is neither a window nor a widget.
pub fn parse_gui<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<GuiDef>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let pos = expect(tokens, &Token::Keyword(Keyword::Gui))?;
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::LBrace)?;

    let mut elements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Keyword(Keyword::Window), _)) => {
                elements.push(GuiElement::Window(parse_window(tokens)?));
            },
            Some((Token::Widget(_), _)) => elements.push(GuiElement::Widget(parse_widget(tokens)?)),
            Some((tok, pos)) => return Err(unexpected("`window`, a widget or `}`", tok, *pos)),
            None => return Err(ParseError::UnexpectedEndOfInput { position: pos }),
        }
    }

    Ok(GuiDef { name,
                elements,
                pos })
}

/// Parses a window element.
///
/// Grammar: `window := "window" attributes "{" widget* "}"`
fn parse_window<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<WindowElement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let pos = expect(tokens, &Token::Keyword(Keyword::Window))?;
    let attributes = parse_attributes(tokens)?;
    expect(tokens, &Token::LBrace)?;

    let mut children = Vec::new();
    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }
        children.push(parse_widget(tokens)?);
    }

    Ok(WindowElement { attributes,
                       children,
                       pos })
}

/// Parses a widget element.
///
/// The kind tag is the widget keyword itself, so any keyword registered in
/// the widget table parses here without further grammar changes.
///
/// Grammar: `widget := WIDGET_KEYWORD attributes ";"?`
fn parse_widget<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<WidgetElement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (kind, pos) = match tokens.next() {
        Some((Token::Widget(kind), pos)) => ((*kind).to_string(), *pos),
        Some((tok, pos)) => return Err(unexpected("a widget or `}`", tok, *pos)),
        None => return Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    };
    let attributes = parse_attributes(tokens)?;
    skip_semicolon(tokens);

    Ok(WidgetElement { kind,
                       attributes,
                       pos })
}

/// Parses a parenthesized attribute list: `(name: expression, ...)`.
fn parse_attributes<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Attributes>
    where I: Iterator<Item = &'a (Token, Position)>
{
    expect(tokens, &Token::LParen)?;
    let entries = parse_comma_separated(tokens, parse_attribute, &Token::RParen)?;

    let mut attributes = Attributes::new();
    for (name, value) in entries {
        insert_attribute(&mut attributes, name, value);
    }
    Ok(attributes)
}

/// Parses one `name: expression` attribute.
fn parse_attribute<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let name = parse_word(tokens, "an attribute name")?;
    expect(tokens, &Token::Colon)?;
    let value = parse_expression(tokens)?;
    Ok((name, value))
}
