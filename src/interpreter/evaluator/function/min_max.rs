use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Computes the minimum or maximum of two or more numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`. The result stays an integer when every argument is an
/// integer; otherwise all arguments are compared as reals.
///
/// The two-argument minimum is enforced by the arity table before this
/// function runs.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least two arguments.
///
/// # Returns
/// `Value::Integer` or `Value::Real` depending on the input types.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::function::min_max::min_max, value::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7)]).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max("max", &[Value::Real(2.5), Value::Integer(1), Value::Real(9.0)]).unwrap();
/// assert_eq!(r, Value::Real(9.0));
/// ```
pub fn min_max(name: &str, args: &[Value]) -> EvalResult<Value> {
    let all_integers = args.iter().all(|arg| matches!(arg, Value::Integer(_)));

    if all_integers {
        let mut best = match args[0] {
            Value::Integer(n) => n,
            Value::Real(_) => unreachable!(),
        };
        for arg in &args[1..] {
            if let Value::Integer(n) = arg {
                best = if name == "min" {
                    best.min(*n)
                } else {
                    best.max(*n)
                };
            }
        }
        return Ok(Value::Integer(best));
    }

    let mut best = args[0].as_real();
    for arg in &args[1..] {
        let x = arg.as_real();
        best = if name == "min" { best.min(x) } else { best.max(x) };
    }
    Ok(Value::Real(best))
}
