/// Core parsing logic.
///
/// Contains the parse entry point, whole-input consumption checks, and
/// assignment recognition.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels and
/// the right-associative exponentiation level.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus and plus, literals, variables, history references,
/// grouping, and function calls.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by multiple parsing functions.
pub mod utils;
