use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported_operands,
            core::{Context, EvalResult},
        },
        lexer::Position,
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers for `+`, `-` and `*`, with overflow checked.
    /// Any real operand promotes the other to real. Division always produces a
    /// real, and a zero divisor is an error for integers and reals alike. The
    /// operator must be one of `Add`, `Sub`, `Mul` or `Div`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use nixi::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, lexer::Position, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), pos);
    /// assert_eq!(result.unwrap(), Value::Real(3.5));
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, &Value::Real(1.5), &Value::Integer(2), pos);
    /// assert_eq!(result.unwrap(), Value::Real(3.0));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          pos: Position)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        if op == Div {
            let divisor = right.as_real(pos)?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { position: pos });
            }
            return Ok(Real(left.as_real(pos)? / divisor));
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    _ => return Err(unsupported_operands(op, left, right, pos)),
                };
                result.map(Integer)
                      .ok_or(RuntimeError::Overflow { position: pos })
            },
            _ => {
                let a = left.as_real(pos)?;
                let b = right.as_real(pos)?;
                match op {
                    Add => Ok(Real(a + b)),
                    Sub => Ok(Real(a - b)),
                    Mul => Ok(Real(a * b)),
                    _ => Err(unsupported_operands(op, left, right, pos)),
                }
            },
        }
    }
}
