use ordered_float::OrderedFloat;

use crate::interpreter::lexer::Position;

/// A numeric literal as written in the source.
///
/// Literals containing a `.` are reals; all others are integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(OrderedFloat<f64>),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(OrderedFloat(value))
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
        };
        write!(f, "{operator}")
    }
}

/// An ordered name-to-expression map.
///
/// Used for attribute-set literals and for window and widget attributes.
/// Entries keep the order in which their names first appeared.
pub type Attributes = Vec<(String, Expr)>;

/// Inserts an attribute, replacing the value of an existing entry in place
/// so that the first occurrence keeps its position.
pub fn insert_attribute(attributes: &mut Attributes, name: String, value: Expr) {
    if let Some(entry) = attributes.iter_mut().find(|(key, _)| *key == name) {
        entry.1 = value;
    } else {
        attributes.push((name, value));
    }
}

/// Looks up an attribute by name.
#[must_use]
pub fn attribute<'a>(attributes: &'a [(String, Expr)], name: &str) -> Option<&'a Expr> {
    attributes.iter()
              .find(|(key, _)| key == name)
              .map(|(_, value)| value)
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Literals record the position of their first token; operators, attribute
/// access and pipes record the position of their operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: Number,
        /// Position in the source code.
        pos:   Position,
    },
    /// A string literal.
    Str {
        /// The literal text, with escapes resolved.
        value: String,
        /// Position in the source code.
        pos:   Position,
    },
    /// `true` or `false`.
    Bool {
        /// The literal value.
        value: bool,
        /// Position in the source code.
        pos:   Position,
    },
    /// Reference to a variable or function by name.
    Identifier {
        /// The referenced name.
        name: String,
        /// Position in the source code.
        pos:  Position,
    },
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
    /// An attribute-set literal: `{ name = "app"; debug = true; }`.
    AttrSet {
        /// Entries in source order.
        attributes: Attributes,
        /// Position in the source code.
        pos:        Position,
    },
    /// Attribute access: `config.name`.
    AttrAccess {
        /// The expression producing the record.
        object:    Box<Self>,
        /// The attribute to read.
        attribute: String,
        /// Position in the source code.
        pos:       Position,
    },
    /// A list literal: `[1, 2, 3]`.
    List {
        /// Elements in source order.
        elements: Vec<Self>,
        /// Position in the source code.
        pos:      Position,
    },
    /// Function call expression (e.g. `greet("World")`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position in the source code.
        pos:       Position,
    },
    /// A pipe: `value | transform(extra)`.
    Pipe {
        /// The value being forwarded.
        left:  Box<Self>,
        /// The receiving expression.
        right: Box<Self>,
        /// Position in the source code.
        pos:   Position,
    },
}

impl Expr {
    /// Gets the source position of the expression.
    /// ## Example
    /// ```
    /// use nixi::{ast::Expr, interpreter::lexer::Position};
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { pos, .. }
            | Self::Str { pos, .. }
            | Self::Bool { pos, .. }
            | Self::Identifier { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::AttrSet { pos, .. }
            | Self::AttrAccess { pos, .. }
            | Self::List { pos, .. }
            | Self::Call { pos, .. }
            | Self::Pipe { pos, .. } => *pos,
        }
    }
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Position in the source code.
    pub pos:    Position,
}

/// A named, declarative description of an application window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiDef {
    /// Name of the generated window class.
    pub name:     String,
    /// Windows and bare widgets, in source order.
    pub elements: Vec<GuiElement>,
    /// Position in the source code.
    pub pos:      Position,
}

/// A `window(...) { ... }` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowElement {
    /// Window attributes such as `title`, `width` and `height`.
    pub attributes: Attributes,
    /// Widgets placed inside the window.
    pub children:   Vec<WidgetElement>,
    /// Position in the source code.
    pub pos:        Position,
}

/// A single widget such as `button(text: "OK")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetElement {
    /// The kind tag, equal to the keyword that introduced the widget.
    pub kind:       String,
    /// Widget attributes such as `text`, `id` and `onClick`.
    pub attributes: Attributes,
    /// Position in the source code.
    pub pos:        Position,
}

/// One element of a GUI definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiElement {
    /// A window with its own attributes and children.
    Window(WindowElement),
    /// A widget placed directly in the GUI definition.
    Widget(WidgetElement),
}

/// Represents a statement.
///
/// A program is an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable binding using `let`.
    Let {
        /// The bound name.
        name:  String,
        /// The bound value.
        value: Expr,
        /// Position in the source code.
        pos:   Position,
    },
    /// A function definition using `func`.
    Function(FunctionDef),
    /// A `return` statement.
    Return {
        /// The returned value.
        value: Expr,
        /// Position in the source code.
        pos:   Position,
    },
    /// A GUI definition using `gui`.
    Gui(GuiDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Position in the source code.
        pos:  Position,
    },
}

impl Statement {
    /// Gets the source position of the statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Let { pos, .. } | Self::Return { pos, .. } | Self::Expression { pos, .. } => {
                *pos
            },
            Self::Function(def) => def.pos,
            Self::Gui(def) => def.pos,
        }
    }
}
