use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Computes the sine of the argument (radians). Always real.
pub fn sin(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real().sin()))
}

/// Computes the cosine of the argument (radians). Always real.
pub fn cos(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real().cos()))
}

/// Computes the tangent of the argument (radians). Always real.
///
/// No domain restriction: near-asymptote arguments produce whatever the
/// underlying `f64::tan` produces.
pub fn tan(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(args[0].as_real().tan()))
}

/// Computes the absolute value, preserving the representation.
///
/// # Errors
/// `EvalError::Overflow` for `abs(i64::MIN)`, which has no integer
/// counterpart.
pub fn abs(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(EvalError::Overflow),
        Value::Real(r) => Ok(Value::Real(r.abs())),
    }
}

/// Computes `ceil` or `floor`, selected by name.
///
/// Integers are already their own ceiling and floor and pass through
/// unchanged; reals stay real (`ceil(3.7)` is the real `4`, not the
/// integer).
///
/// # Parameters
/// - `name`: Either `"ceil"` or `"floor"`.
/// - `args`: Slice containing exactly one argument.
pub fn unary_round(name: &str, args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Real(r) => {
            let value = if name == "ceil" { r.ceil() } else { r.floor() };
            Ok(Value::Real(value))
        },
    }
}
