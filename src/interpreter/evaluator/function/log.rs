use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Computes the natural logarithm of a positive value.
///
/// # Errors
/// - `EvalError::InvalidArgument` if the argument is zero or negative.
pub fn log(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(positive_arg("log", &args[0])?.ln()))
}

/// Computes the base-10 logarithm of a positive value.
///
/// # Errors
/// - `EvalError::InvalidArgument` if the argument is zero or negative.
pub fn log10(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Real(positive_arg("log10", &args[0])?.log10()))
}

/// Converts a logarithm argument to real, rejecting the non-positive
/// domain.
fn positive_arg(name: &str, value: &Value) -> EvalResult<f64> {
    let x = value.as_real();

    if x <= 0.0 {
        return Err(EvalError::InvalidArgument { details:
                                                    format!("{name} of non-positive number"), });
    }

    Ok(x)
}
