use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of two numeric representations. The
/// evaluator keeps results as `Integer` for as long as the arithmetic stays
/// exact, and promotes to `Real` the moment an operation mixes
/// representations or inherently produces a real result (`^`, trig, log).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(v: LiteralValue) -> Self {
        match v {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond 2^53 round to the nearest representable real; mixed
    /// arithmetic always promotes rather than failing.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(), 10.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => *n as f64,
        }
    }

    /// Returns `true` when the value is the exact integer or real zero.
    ///
    /// Used by the division and modulo checks, which must reject a zero
    /// right operand in either representation.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Real(r) => *r == 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
