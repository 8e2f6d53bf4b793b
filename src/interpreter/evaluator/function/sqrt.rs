use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Computes the square root of a non-negative value.
///
/// The result is always real, even for perfect squares of integers. A
/// negative argument is a domain error, never a silent `NaN`.
///
/// # Parameters
/// - `args`: Slice containing exactly one numeric argument.
///
/// # Errors
/// - `EvalError::InvalidArgument` if the argument is negative.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::sqrt::sqrt, value::Value};
///
/// let r = sqrt(&[Value::Integer(16)]).unwrap();
/// assert_eq!(r, Value::Real(4.0));
///
/// assert!(sqrt(&[Value::Integer(-1)]).is_err());
/// ```
pub fn sqrt(args: &[Value]) -> EvalResult<Value> {
    let x = args[0].as_real();

    if x < 0.0 {
        return Err(EvalError::InvalidArgument { details: "sqrt of negative number".to_string() });
    }

    Ok(Value::Real(x.sqrt()))
}
