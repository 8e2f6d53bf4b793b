/// Core evaluation logic and context management.
///
/// Contains the evaluation context (variables, constants, result history)
/// and the main expression dispatch.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary arithmetic, including the
/// integer/real promotion rules and zero-divisor checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation for both numeric representations.
pub mod unary;

/// Built-in function evaluation.
///
/// Handles the built-in function table, argument arity checking, and the
/// individual math functions.
pub mod function;
