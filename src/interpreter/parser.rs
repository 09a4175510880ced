/// Parser entry points.
///
/// Turns a whole token sequence into a program and exposes the expression
/// entry point shared by every other parsing module.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels: pipe, equality,
/// additive and multiplicative.
pub mod binary;

/// Postfix and primary expression parsing.
///
/// Handles literals, identifiers, grouping, attribute sets, lists, attribute
/// access and function calls.
pub mod postfix;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as function bodies.
pub mod block;

/// GUI definition parsing.
///
/// Parses `gui` definitions, windows and widgets.
pub mod gui;

/// Utility functions for the parser.
///
/// Provides token expectations, comma-separated lists and name parsing.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to bindings, function definitions, GUI
/// definitions, returns and expression statements.
pub mod statement;
