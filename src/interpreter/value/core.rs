use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::{GuiDef, Number},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::BuiltinDef},
        lexer::Position,
        value::closure::Closure,
    },
    util::num::{i64_equals_f64, i64_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression, binding or function call can
/// produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value, produced by reading a missing attribute, by an empty
    /// function body and by builtins that return nothing.
    Absent,
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by literals and by the `==` operator.
    Bool(bool),
    /// A string.
    Str(String),
    /// A list of values.
    List(Rc<Vec<Self>>),
    /// A record built from an attribute-set literal.
    ///
    /// Keys are kept sorted so records display deterministically.
    Record(Rc<BTreeMap<String, Self>>),
    /// A user-defined function.
    Function(Rc<Closure>),
    /// A builtin function from the global scope.
    Builtin(&'static BuiltinDef),
    /// A GUI definition, carried as data for the code generator.
    Gui(Rc<GuiDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(v: BTreeMap<String, Self>) -> Self {
        Self::Record(Rc::new(v))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Real(r) => Self::Real(r.0),
        }
    }
}

impl Value {
    /// Returns the name of the value's type as shown in error messages.
    ///
    /// # Example
    /// ```
    /// use nixi::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "int");
    /// assert_eq!(Value::from("a").type_name(), "str");
    /// assert_eq!(Value::Absent.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "null",
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Record(_) => "record",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
            Self::Gui(_) => "gui",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`.
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `pos`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::TypeError | Overflow)`: If not numeric or not
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use nixi::interpreter::{lexer::Position, value::core::Value};
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(Position::new(1, 1)).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, pos: Position) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::Overflow { position: pos }),
            _ => Err(RuntimeError::TypeError { details:  format!("expected a number, found {}",
                                                                 self.type_name()),
                                               position: pos, }),
        }
    }

    /// Returns `true` if the value is an integer or a real.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }

    /// Compares two values the way the `==` operator does.
    ///
    /// Equality is structural. Integers and reals compare by numeric value,
    /// also inside lists and records; every other pair of different types is
    /// unequal.
    ///
    /// # Example
    /// ```
    /// use nixi::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).loosely_equals(&Value::Real(2.0)));
    /// assert!(Value::from(vec![Value::Integer(1)]).loosely_equals(&Value::from(vec![Value::Real(1.0)])));
    /// assert!(!Value::Integer(1).loosely_equals(&Value::from("1")));
    /// ```
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                i64_equals_f64(*a, *b)
            },
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.loosely_equals(y))
            },
            (Self::Record(a), Self::Record(b)) => {
                a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && va.loosely_equals(vb))
            },
            _ => self == other,
        }
    }
}

/// Writes a value nested inside a list or record: strings are quoted.
fn write_nested(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        _ => write!(f, "{value}"),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write_nested(f, value)?;
                }

                write!(f, "]")
            },
            Self::Record(entries) => {
                if entries.is_empty() {
                    return write!(f, "{{}}");
                }

                write!(f, "{{ ")?;
                for (name, value) in entries.iter() {
                    write!(f, "{name} = ")?;
                    write_nested(f, value)?;
                    write!(f, "; ")?;
                }
                write!(f, "}}")
            },
            Self::Function(closure) => write!(f, "<function {}>", closure.name()),
            Self::Builtin(def) => write!(f, "<builtin {}>", def.name),
            Self::Gui(def) => write!(f, "<gui {}>", def.name),
        }
    }
}
