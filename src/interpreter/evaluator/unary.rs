use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates arithmetic negation.
    ///
    /// Negation preserves the operand's representation: integers stay
    /// integers (checked, since `-i64::MIN` does not exist) and reals stay
    /// reals.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let v = Context::eval_negate(&Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    /// ```
    pub fn eval_negate(value: &Value) -> EvalResult<Value> {
        match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(EvalError::Overflow),
            Value::Real(r) => Ok(Value::Real(-r)),
        }
    }
}
