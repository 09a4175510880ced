use std::rc::Rc;

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
    /// Evaluates `+` and `*` on strings and lists.
    ///
    /// - `str + str` and `list + list` concatenate.
    /// - `str * int`, `int * str`, `list * int` and `int * list` repeat; a
    ///   count of zero or less gives an empty result.
    ///
    /// Every other combination is a `TypeError`. A repetition longer than
    /// 2^24 bytes or items is an `Overflow`.
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
    /// let joined = Context::eval_sequence_op(BinaryOperator::Add, &"ab".into(), &"c".into(), pos);
    /// assert_eq!(joined.unwrap(), Value::from("abc"));
    ///
    /// let repeated = Context::eval_sequence_op(BinaryOperator::Mul, &"ab".into(), &Value::Integer(3), pos);
    /// assert_eq!(repeated.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_sequence_op(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            pos: Position)
                            -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::{Integer, List, Str};

        match (op, left, right) {
            (Add, Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
            (Add, List(a), List(b)) => {
                let mut items = Vec::with_capacity(a.len() + b.len());
                items.extend(a.iter().cloned());
                items.extend(b.iter().cloned());
                Ok(items.into())
            },
            (Mul, Str(s), Integer(n)) | (Mul, Integer(n), Str(s)) => {
                let count = repeat_count(s.len(), *n, pos)?;
                Ok(Str(s.repeat(count)))
            },
            (Mul, List(items), Integer(n)) | (Mul, Integer(n), List(items)) => {
                let count = repeat_count(items.len(), *n, pos)?;
                Ok(repeat_list(items, count))
            },
            _ => Err(unsupported_operands(op, left, right, pos)),
        }
    }
}

/// Upper bound on the length of a repeated string (in bytes) or list.
const MAX_REPEAT_LEN: usize = 1 << 24;

/// Clamps a repetition count to zero or more.
///
/// An empty operand repeats zero times whatever the count. A result longer
/// than [`MAX_REPEAT_LEN`] is an `Overflow`.
fn repeat_count(len: usize, n: i64, pos: Position) -> EvalResult<usize> {
    if len == 0 || n <= 0 {
        return Ok(0);
    }
    usize::try_from(n).ok()
                      .filter(|count| {
                          len.checked_mul(*count)
                             .is_some_and(|total| total <= MAX_REPEAT_LEN)
                      })
                      .ok_or(RuntimeError::Overflow { position: pos })
}

fn repeat_list(items: &Rc<Vec<Value>>, count: usize) -> Value {
    let mut repeated = Vec::with_capacity(items.len() * count);
    for _ in 0..count {
        repeated.extend(items.iter().cloned());
    }
    repeated.into()
}
