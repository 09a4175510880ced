//! # nixi
//!
//! nixi is a small scripting language with a declarative GUI sub-language.
//! Source text is tokenized and parsed into one syntax tree, which is then
//! either evaluated by a tree-walking interpreter or translated into a Python
//! program driving PyQt5.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and the GUI element
/// types that represent the syntactic structure of source code as a tree.
/// The tree is built by the parser and consumed by both the evaluator and the
/// code generator.
///
/// # Responsibilities
/// - Defines expression, statement and GUI element types for all language
///   constructs.
/// - Attaches source positions to nodes for error reporting.
/// - Keeps attribute maps in source order for deterministic code generation.
pub mod ast;
/// Translates syntax trees into Python source.
///
/// The generated module defines one `QMainWindow` subclass per GUI
/// definition and starts the first one when run as a script.
pub mod codegen;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating code. Every error carries the line and column it
/// refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations. It exposes the public API for interpreting programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;
/// The widget registry shared by the tokenizer and the code generator.
pub mod widget;

/// Tokenizes and parses source text into a program.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` for the first fault found.
///
/// # Example
/// ```
/// use nixi::{ast::Statement, parse_source};
///
/// let program = parse_source("func id(x) { return x; }").unwrap();
/// assert!(matches!(program[0], Statement::Function(_)));
///
/// assert!(parse_source("let = 1").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string using a fresh evaluation context that writes to standard output.
/// With `auto_print`, the final value is printed unless it is absent.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use nixi::{get_result, interpreter::value::core::Value};
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "let result = 2 + 3 * 4";
/// assert_eq!(get_result(source, false).unwrap(), Value::Integer(14));
///
/// // Example with an intentional error (unknown variable).
/// let source = "let y = x + 1"; // 'x' is not defined
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Value, Error> {
    let program = parse_source(source)?;
    let mut context = Context::new();
    let value = context.run(&program)?;

    if auto_print && value != Value::Absent {
        println!("{value}");
    }

    Ok(value)
}

/// Translates source text into a Python/PyQt5 program.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` if the source does not parse.
pub fn compile(source: &str) -> Result<String, Error> {
    let program = parse_source(source)?;
    Ok(codegen::generate(&program))
}
