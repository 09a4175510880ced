use crate::interpreter::{evaluator::core::Context, value::core::Value};

impl Context {
    /// Evaluates `==`.
    ///
    /// Values of any type may be compared; the result is always a boolean.
    /// Integers and reals compare by numeric value.
    ///
    /// # Example
    /// ```
    /// use nixi::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_equality(&Value::Integer(1), &Value::Real(1.0)), Value::Bool(true));
    /// assert_eq!(Context::eval_equality(&"a".into(), &Value::Absent), Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_equality(left: &Value, right: &Value) -> Value {
        Value::Bool(left.loosely_equals(right))
    }
}
