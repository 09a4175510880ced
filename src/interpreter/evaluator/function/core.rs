use std::{fmt, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, print, run},
            host::Host,
        },
        lexer::Position,
        value::{
            closure::{Closure, Scope},
            core::Value,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, the host and the
/// position of the call. It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], &mut Host, Position) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "echo"   => { arity: Arity::AtLeast(0), func: print::echo },
    "run"    => { arity: Arity::Exact(1), func: run::run },
    "len"    => { arity: Arity::Exact(1), func: builtin::len },
    "str"    => { arity: Arity::Exact(1), func: builtin::str },
    "int"    => { arity: Arity::Exact(1), func: builtin::int },
    "float"  => { arity: Arity::Exact(1), func: builtin::float },
    "assert" => { arity: Arity::Exact(1), func: builtin::assert_fn },
}

/// A builtin function: its name, accepted argument counts and handler.
pub struct BuiltinDef {
    /// The name the builtin is bound to in the global scope.
    pub name:  &'static str,
    /// The accepted argument counts.
    pub arity: Arity,
    func:      BuiltinFn,
}

impl BuiltinDef {
    /// Checks the argument count and applies the builtin.
    ///
    /// # Errors
    /// Returns `ArgumentCountMismatch` if the arity does not allow
    /// `args.len()` arguments, or any error raised by the builtin itself.
    pub fn call(&self, args: &[Value], host: &mut Host, pos: Position) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:     self.name.to_string(),
                                                             expected: self.arity.to_string(),
                                                             found:    args.len(),
                                                             position: pos, });
        }
        (self.func)(args, host, pos)
    }
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for BuiltinDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Binds every builtin in `scope` under its name.
///
/// # Example
/// ```
/// use nixi::interpreter::{
///     evaluator::function::core::{BUILTIN_FUNCTIONS, install_builtins},
///     value::closure::Scope,
/// };
///
/// let mut scope = Scope::new();
/// install_builtins(&mut scope);
///
/// assert_eq!(scope.len(), BUILTIN_FUNCTIONS.len());
/// assert!(scope.contains_key("len"));
/// ```
pub fn install_builtins(scope: &mut Scope) {
    for def in BUILTIN_TABLE {
        scope.insert(def.name.to_string(), Value::Builtin(def));
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The callee is resolved by name in `scope` before any argument is
    /// evaluated. Arguments are then evaluated left to right. When the call is
    /// the right side of a pipe, `piped` holds the left value, which becomes
    /// the first argument.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions.
    /// - `piped`: A value to pass ahead of the arguments.
    /// - `pos`: Position of the call for error reporting.
    /// - `scope`: The scope the call appears in.
    ///
    /// # Returns
    /// The function result or an error if lookup or application fails.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            piped: Option<Value>,
                            pos: Position,
                            scope: &Scope)
                            -> EvalResult<Value> {
        let callee = resolve_function(name, pos, scope)?;

        let mut arg_vals = Vec::with_capacity(arguments.len() + usize::from(piped.is_some()));
        arg_vals.extend(piped);
        for argument in arguments {
            arg_vals.push(self.eval(argument, scope)?);
        }

        self.apply(name, &callee, arg_vals, pos)
    }

    /// Evaluates a pipe expression.
    ///
    /// The left side is evaluated first. A call on the right receives it as
    /// its first argument; a bare identifier on the right is called with it
    /// as the only argument. Any other right side is not evaluated and the
    /// left value is returned unchanged.
    pub(crate) fn eval_pipe(&mut self,
                            left: &Expr,
                            right: &Expr,
                            pos: Position,
                            scope: &Scope)
                            -> EvalResult<Value> {
        let value = self.eval(left, scope)?;

        match right {
            Expr::Call { name,
                         arguments,
                         pos: call_pos, } => {
                self.eval_call(name, arguments, Some(value), *call_pos, scope)
            },
            Expr::Identifier { name, .. } => {
                let callee = resolve_function(name, pos, scope)?;
                self.apply(name, &callee, vec![value], pos)
            },
            _ => Ok(value),
        }
    }

    /// Applies a callable value to evaluated arguments.
    ///
    /// # Errors
    /// Returns `NotCallable` if `callee` is neither a user-defined function
    /// nor a builtin.
    fn apply(&mut self,
             name: &str,
             callee: &Value,
             arg_vals: Vec<Value>,
             pos: Position)
             -> EvalResult<Value> {
        match callee {
            Value::Function(closure) => self.call_closure(closure, arg_vals),
            Value::Builtin(def) => def.call(&arg_vals, &mut self.host, pos),
            other => Err(RuntimeError::NotCallable { name:      name.to_string(),
                                                     type_name: other.type_name(),
                                                     position:  pos, }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The call scope starts as a copy of the captured scope. The function's
    /// own name is bound to the closure so it can call itself, then parameters
    /// are bound positionally. Extra arguments are ignored and parameters
    /// without an argument stay unbound.
    ///
    /// The body runs statement by statement. A `return` at the top level of
    /// the body ends the call with its value; otherwise the value of the last
    /// statement is returned, or `Value::Absent` for an empty body.
    fn call_closure(&mut self, closure: &Rc<Closure>, arg_vals: Vec<Value>) -> EvalResult<Value> {
        let mut scope = closure.captured.clone();
        scope.insert(closure.def.name.clone(), Value::Function(Rc::clone(closure)));
        for (param, value) in closure.def.params.iter().zip(arg_vals) {
            scope.insert(param.clone(), value);
        }

        let mut result = Value::Absent;
        for statement in &closure.def.body {
            result = self.eval_statement(statement, &mut scope)?;
            if matches!(statement, Statement::Return { .. }) {
                break;
            }
        }

        Ok(result)
    }
}

/// Looks up a callee by name.
///
/// # Errors
/// Returns `UnknownFunction` if the name is not bound.
fn resolve_function(name: &str, pos: Position, scope: &Scope) -> EvalResult<Value> {
    scope.get(name)
         .cloned()
         .ok_or_else(|| RuntimeError::UnknownFunction { name:     name.to_string(),
                                                        position: pos, })
}
