use std::collections::HashMap;

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// A mapping from names to values.
///
/// Variables, user-defined functions and builtins all live in the same
/// scope.
pub type Scope = HashMap<String, Value>;

/// A user-defined function together with the scope it was defined in.
///
/// The captured scope is a snapshot: bindings made after the definition are
/// not visible to the function body.
///
/// # Example
/// ```
/// use nixi::{
///     ast::FunctionDef,
///     interpreter::{
///         lexer::Position,
///         value::{
///             closure::{Closure, Scope},
///             core::Value,
///         },
///     },
/// };
///
/// let mut scope = Scope::new();
/// scope.insert("x".to_string(), Value::Integer(1));
///
/// let def = FunctionDef { name:   "f".to_string(),
///                         params: vec![],
///                         body:   vec![],
///                         pos:    Position::new(1, 1), };
/// let closure = Closure::new(def, &scope);
///
/// scope.insert("x".to_string(), Value::Integer(2));
/// assert_eq!(closure.captured.get("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    /// The function definition.
    pub def:      FunctionDef,
    /// A copy of the defining scope.
    pub captured: Scope,
}

impl Closure {
    /// Creates a closure capturing a copy of `scope`.
    #[must_use]
    pub fn new(def: FunctionDef, scope: &Scope) -> Self {
        Self { def,
               captured: scope.clone() }
    }

    /// The name the function was defined under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }
}
