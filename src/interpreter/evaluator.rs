/// Binary operator evaluation logic.
///
/// Handles arithmetic on numbers, concatenation and repetition of strings and
/// lists, and structural equality.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and the top-level
/// program runner.
pub mod core;

/// The evaluator's connection to the outside world.
///
/// Defines where builtin output goes and how external commands are run, so
/// both can be replaced in tests.
pub mod host;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking,
/// pipes and return value computation.
pub mod function;
