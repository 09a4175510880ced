/// Evaluation engine.
///
/// Walks the syntax tree against a scope, applies operators and calls
/// user-defined and builtin functions.
pub mod evaluator;

/// Reserved words.
///
/// Maps words to keyword tokens and hands widget keywords to the widget
/// registry.
pub mod keyword;

/// Tokenizer.
///
/// Turns source text into positioned tokens ending with an end-of-input
/// marker.
pub mod lexer;

/// Recursive-descent parser.
///
/// Builds statements and expressions from the token sequence.
pub mod parser;

/// Runtime values.
///
/// Defines the values expressions evaluate to and the closures produced by
/// function definitions.
pub mod value;
