use std::fmt::Write;

use crate::ast::{Expr, Number};

/// Translates an expression into Python source.
///
/// # Example
/// ```
/// use nixi::{
///     ast::Statement,
///     codegen::expr::compile_expression,
///     parse_source,
/// };
///
/// let program = parse_source(r#"{ name = "app"; size = [1, 2.5] }.name"#).unwrap();
/// let Statement::Expression { expr, .. } = &program[0] else { unreachable!() };
///
/// assert_eq!(compile_expression(expr), r#"{"name": "app", "size": [1, 2.5]}['name']"#);
/// ```
#[must_use]
pub fn compile_expression(expr: &Expr) -> String {
    match expr {
        Expr::Number { value, .. } => compile_number(*value),
        Expr::Str { value, .. } => string_literal(value),
        Expr::Bool { value, .. } => String::from(if *value { "True" } else { "False" }),
        Expr::Identifier { name, .. } => python_name(name),
        Expr::BinaryOp { left, op, right, .. } => {
            format!("({} {op} {})", compile_expression(left), compile_expression(right))
        },
        Expr::AttrSet { attributes, .. } => {
            let entries = attributes.iter()
                                    .map(|(name, value)| {
                                        format!("{}: {}",
                                                string_literal(name),
                                                compile_expression(value))
                                    })
                                    .collect::<Vec<_>>();
            format!("{{{}}}", entries.join(", "))
        },
        Expr::AttrAccess { object, attribute, .. } => {
            format!("{}['{attribute}']", compile_expression(object))
        },
        Expr::List { elements, .. } => format!("[{}]", compile_list(elements)),
        Expr::Call { name, arguments, .. } => {
            format!("{}({})", python_name(name), compile_list(arguments))
        },
        Expr::Pipe { left, right, .. } => {
            let left = compile_expression(left);
            match right.as_ref() {
                Expr::Call { name, arguments, .. } if arguments.is_empty() => {
                    format!("{}({left})", python_name(name))
                },
                Expr::Call { name, arguments, .. } => {
                    format!("{}({left}, {})", python_name(name), compile_list(arguments))
                },
                Expr::Identifier { name, .. } => format!("{}({left})", python_name(name)),
                _ => left,
            }
        },
    }
}

fn compile_list(items: &[Expr]) -> String {
    items.iter()
         .map(compile_expression)
         .collect::<Vec<_>>()
         .join(", ")
}

fn compile_number(value: Number) -> String {
    match value {
        Number::Integer(n) => n.to_string(),
        Number::Real(r) => format!("{:?}", r.0),
    }
}

/// Maps a source name to a Python identifier: `-` becomes `_`.
#[must_use]
pub fn python_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Returns `true` if `text` can be used as a Python attribute name.
pub(in crate::codegen) fn is_python_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next()
         .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
    && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Renders a double-quoted Python string literal.
///
/// # Example
/// ```
/// use nixi::codegen::expr::string_literal;
///
/// assert_eq!(string_literal("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
#[must_use]
pub fn string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(literal, "\\u{:04x}", u32::from(c));
            },
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
