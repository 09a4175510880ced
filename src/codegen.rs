/// Code generation driver.
///
/// Holds the line buffer and indentation state, translates statements and
/// adds the module preamble and epilogue when the program defines a GUI.
pub mod core;

/// Expression translation.
///
/// Renders expressions as Python expressions: literals, parenthesized binary
/// operations, dictionary and list literals, keyed lookups, calls and pipes.
pub mod expr;

/// GUI translation.
///
/// Turns a GUI definition into a `QMainWindow` subclass whose constructor
/// builds and lays out every widget.
pub mod gui;

pub use self::core::generate;
