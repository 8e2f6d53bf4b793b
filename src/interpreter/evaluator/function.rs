/// Built-in function table and call dispatch.
///
/// Defines the lookup table mapping function names to implementations and
/// arity constraints, and the dispatcher that checks both.
pub mod core;

/// Simple one-argument builtins.
///
/// Trigonometry and rounding functions with no domain restrictions.
pub mod builtin;

/// Square root with its non-negative domain check.
pub mod sqrt;

/// Natural and base-10 logarithms with their positive domain checks.
pub mod log;

/// Variadic minimum and maximum.
pub mod min_max;
