use std::{collections::BTreeMap, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{function::core::install_builtins, host::Host},
        lexer::Position,
        value::{
            closure::{Closure, Scope},
            core::Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How deeply expressions may nest during evaluation, counting every
/// expression on the path from a statement down through function calls.
const MAX_DEPTH: usize = 200;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global scope, pre-populated
/// with the builtins, and the host that builtins write to and run commands
/// through.
///
/// ## Usage
///
/// `Context` is created once and reused for running programs. Bindings made
/// by one call to [`Context::run`] are visible to the next.
pub struct Context {
    /// The global scope.
    pub globals: Scope,
    /// Output sink and command runner used by builtins.
    pub host:    Host,
    depth:       usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context writing to standard output and
    /// running commands through the system shell.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(Host::stdio())
    }

    /// Creates a new evaluation context with the given host.
    ///
    /// # Example
    /// ```
    /// use nixi::interpreter::evaluator::{core::Context, host::Host};
    ///
    /// let context = Context::with_host(Host::stdio());
    /// assert!(context.globals.contains_key("echo"));
    /// ```
    #[must_use]
    pub fn with_host(host: Host) -> Self {
        let mut globals = Scope::new();
        install_builtins(&mut globals);
        Self { globals,
               host,
               depth: 0 }
    }

    /// Runs a program against the global scope.
    ///
    /// Statements are evaluated in order. A top-level `return` yields its
    /// value without ending the program.
    ///
    /// # Returns
    /// The value of the last statement, or `Value::Absent` for an empty
    /// program.
    ///
    /// # Example
    /// ```
    /// use nixi::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let program = parse_source("let x = 2; x * 21").unwrap();
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.run(&program).unwrap(), Value::Integer(42));
    /// ```
    pub fn run(&mut self, program: &[Statement]) -> EvalResult<Value> {
        let mut scope = std::mem::take(&mut self.globals);

        let mut result = Ok(Value::Absent);
        for statement in program {
            result = self.eval_statement(statement, &mut scope);
            if result.is_err() {
                break;
            }
        }

        self.globals = scope;
        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// identifiers, binary operations, attribute sets and access, lists,
    /// function calls and pipes. Operands are always evaluated left first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: The scope names are resolved in.
    ///
    /// # Errors
    /// Besides the errors of the expression itself, nesting deeper than the
    /// interpreter allows, usually through runaway recursion, fails with
    /// `RuntimeError::RecursionLimit`.
    pub fn eval(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(RuntimeError::RecursionLimit { position: expr.position() });
        }

        self.depth += 1;
        let result = self.eval_expr(expr, scope);
        self.depth -= 1;
        result
    }

    fn eval_expr(&mut self, expr: &Expr, scope: &Scope) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok((*value).into()),
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::Bool { value, .. } => Ok(Value::Bool(*value)),
            Expr::Identifier { name, pos } => {
                scope.get(name)
                     .cloned()
                     .ok_or_else(|| RuntimeError::UnknownVariable { name:     name.clone(),
                                                                    position: *pos, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             pos, } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                Self::eval_binary(*op, &left, &right, *pos)
            },
            Expr::AttrSet { attributes, .. } => {
                let mut record = BTreeMap::new();
                for (name, value) in attributes {
                    record.insert(name.clone(), self.eval(value, scope)?);
                }
                Ok(record.into())
            },
            Expr::AttrAccess { object,
                               attribute,
                               pos, } => self.eval_attr_access(object, attribute, *pos, scope),
            Expr::List { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element, scope))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(values.into())
            },
            Expr::Call { name,
                         arguments,
                         pos, } => self.eval_call(name, arguments, None, *pos, scope),
            Expr::Pipe { left, right, pos } => self.eval_pipe(left, right, *pos, scope),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles variable bindings, function definitions, returns, GUI
    /// definitions and plain expression statements. Bindings and function
    /// definitions store their value in `scope`.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `scope`: The scope bindings are made in.
    ///
    /// # Returns
    /// The statement's value: the bound value for `let`, the closure for
    /// `func`, the returned value for `return`.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          scope: &mut Scope)
                          -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, scope)?;
                scope.insert(name.clone(), value.clone());
                Ok(value)
            },
            Statement::Function(def) => {
                let closure = Value::Function(Rc::new(Closure::new(def.clone(), scope)));
                scope.insert(def.name.clone(), closure.clone());
                Ok(closure)
            },
            Statement::Return { value, .. } | Statement::Expression { expr: value, .. } => {
                self.eval(value, scope)
            },
            Statement::Gui(def) => Ok(Value::Gui(Rc::new(def.clone()))),
        }
    }

    /// Reads an attribute from a record.
    ///
    /// A missing attribute yields `Value::Absent`.
    ///
    /// # Errors
    /// Returns a `TypeError` if the object is not a record.
    fn eval_attr_access(&mut self,
                        object: &Expr,
                        attribute: &str,
                        pos: Position,
                        scope: &Scope)
                        -> EvalResult<Value> {
        match self.eval(object, scope)? {
            Value::Record(record) => Ok(record.get(attribute).cloned().unwrap_or(Value::Absent)),
            other => Err(RuntimeError::TypeError { details:  format!("cannot read attribute \
                                                                      `{attribute}` of a {} \
                                                                      value",
                                                                     other.type_name()),
                                                   position: pos, }),
        }
    }
}
