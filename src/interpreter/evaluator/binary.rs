use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// The promotion discipline is:
    /// - `+`, `-`, `*` stay `Integer` when both operands are integers
    ///   (checked, so overflow is an error rather than a wrap), and are
    ///   computed as reals otherwise.
    /// - `/` stays `Integer` only when both operands are integers and the
    ///   division is exact; any remainder promotes the whole operation to
    ///   real division. A zero right operand is always an error.
    /// - `%` stays `Integer` for integer operands and uses the floating
    ///   remainder otherwise; both match the dividend's sign. A zero right
    ///   operand is always an error, distinct from the division one.
    /// - `^` always produces a `Real` via `f64::powf`, with no domain
    ///   checks beyond what `powf` itself does.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &x, &y).unwrap();
    /// assert_eq!(result, Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul => Self::eval_additive_like(op, left, right),
            Div => Self::eval_division(left, right),
            Mod => Self::eval_modulo(left, right),
            Pow => Ok(Value::Real(left.as_real().powf(right.as_real()))),
        }
    }

    /// Evaluates `+`, `-`, and `*` with integer preservation.
    fn eval_additive_like(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                _ => unreachable!(),
            };
            return result.map(Value::Integer).ok_or(EvalError::Overflow);
        }

        let left = left.as_real();
        let right = right.as_real();
        Ok(Value::Real(match op {
                           Add => left + right,
                           Sub => left - right,
                           Mul => left * right,
                           _ => unreachable!(),
                       }))
    }

    /// Evaluates `/`, keeping the result an integer only when exact.
    fn eval_division(left: &Value, right: &Value) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            match a.checked_rem(*b) {
                Some(0) => {
                    return a.checked_div(*b)
                            .map(Value::Integer)
                            .ok_or(EvalError::Overflow);
                },
                // Inexact: fall through to real division.
                Some(_) => {},
                // Only i64::MIN % -1 gets here; the quotient overflows too.
                None => return Err(EvalError::Overflow),
            }
        }

        Ok(Value::Real(left.as_real() / right.as_real()))
    }

    /// Evaluates `%` with remainder semantics matching the dividend's sign.
    fn eval_modulo(left: &Value, right: &Value) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(EvalError::ModuloByZero);
        }

        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return a.checked_rem(*b)
                    .map(Value::Integer)
                    .ok_or(EvalError::Overflow);
        }

        Ok(Value::Real(left.as_real() % right.as_real()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_integer_division_stays_integer() {
        let v = Context::eval_binary(BinaryOperator::Div,
                                     &Value::Integer(10),
                                     &Value::Integer(2)).unwrap();
        assert_eq!(v, Value::Integer(5));
    }

    #[test]
    fn inexact_integer_division_promotes_to_real() {
        let v = Context::eval_binary(BinaryOperator::Div,
                                     &Value::Integer(10),
                                     &Value::Integer(4)).unwrap();
        assert_eq!(v, Value::Real(2.5));
    }

    #[test]
    fn zero_divisors_are_distinct_errors() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div,
                                        &Value::Integer(1),
                                        &Value::Integer(0)),
                   Err(EvalError::DivisionByZero));
        assert_eq!(Context::eval_binary(BinaryOperator::Mod,
                                        &Value::Integer(5),
                                        &Value::Real(0.0)),
                   Err(EvalError::ModuloByZero));
    }

    #[test]
    fn remainder_matches_dividend_sign() {
        let v = Context::eval_binary(BinaryOperator::Mod,
                                     &Value::Integer(-7),
                                     &Value::Integer(3)).unwrap();
        assert_eq!(v, Value::Integer(-1));

        let v = Context::eval_binary(BinaryOperator::Mod,
                                     &Value::Real(-7.5),
                                     &Value::Real(3.0)).unwrap();
        assert_eq!(v, Value::Real(-1.5));
    }

    #[test]
    fn power_is_always_real() {
        let v = Context::eval_binary(BinaryOperator::Pow,
                                     &Value::Integer(2),
                                     &Value::Integer(10)).unwrap();
        assert_eq!(v, Value::Real(1024.0));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add,
                                        &Value::Integer(i64::MAX),
                                        &Value::Integer(1)),
                   Err(EvalError::Overflow));
        assert_eq!(Context::eval_binary(BinaryOperator::Div,
                                        &Value::Integer(i64::MIN),
                                        &Value::Integer(-1)),
                   Err(EvalError::Overflow));
    }
}
