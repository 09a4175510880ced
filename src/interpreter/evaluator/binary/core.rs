use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator and operand types. Numeric operands go to
    /// `eval_scalar_op`. Strings and lists go to `eval_sequence_op` for `+`
    /// and `*`. Equality uses `eval_equality` and never fails.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use nixi::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let pos = Position::new(1, 3);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, pos);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Mul, Sub};

        match op {
            Equal => Ok(Self::eval_equality(left, right)),
            Add | Sub | Mul | Div if left.is_numeric() && right.is_numeric() => {
                Self::eval_scalar_op(op, left, right, pos)
            },
            Add | Mul => Self::eval_sequence_op(op, left, right, pos),
            Sub | Div => Err(unsupported_operands(op, left, right, pos)),
        }
    }
}

/// Builds the `TypeError` for an operator applied to incompatible operands.
pub(crate) fn unsupported_operands(op: BinaryOperator,
                                   left: &Value,
                                   right: &Value,
                                   pos: Position)
                                   -> RuntimeError {
    RuntimeError::TypeError { details:  format!("unsupported operand types for {op}: {} and {}",
                                                left.type_name(),
                                                right.type_name()),
                              position: pos, }
}
