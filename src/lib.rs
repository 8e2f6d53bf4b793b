//! # tally
//!
//! tally is an interactive arithmetic expression evaluator written in Rust.
//! It scans, parses, and evaluates expressions with support for variables,
//! built-in functions, built-in constants, and a history of prior results
//! addressable as `$1`, `$2`, and so on.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an input line as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Encodes operator precedence and associativity in the tree shape.
/// - Carries literal values without loss between parsing and evaluation.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing a line
/// of input. It standardizes error reporting and carries detailed information
/// about failures, including character offsets where the failing phase knows
/// them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches character positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete pipeline from
/// raw text to a numeric result. It exposes the public API for interpreting
/// expressions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing, parsing, and evaluating input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::Value},
};

/// Evaluates one line of input against a session context.
///
/// This is the complete pipeline: the line is tokenized, parsed into an
/// expression tree, and evaluated. On success the result is appended to the
/// context's history, so a later line can refer to it as `$n`. On failure
/// the context's history is untouched, though variable assignments nested in
/// already-evaluated subexpressions remain committed.
///
/// # Errors
/// Returns the first error raised by any phase, wrapped in the combined
/// [`Error`] type.
///
/// # Examples
/// ```
/// use tally::{Context, Value, evaluate_line};
///
/// let mut context = Context::new();
///
/// let result = evaluate_line("x = 2 + 3", &mut context).unwrap();
/// assert_eq!(result, Value::Integer(5));
///
/// // `$1` now refers to the result above.
/// let result = evaluate_line("$1 * x", &mut context).unwrap();
/// assert_eq!(result, Value::Integer(25));
///
/// // 'y' is not defined.
/// assert!(evaluate_line("y + 1", &mut context).is_err());
/// ```
pub fn evaluate_line(line: &str, context: &mut Context) -> Result<Value, Error> {
    let tokens = tokenize(line)?;
    let expr = parse(&tokens, line.len())?;
    let value = context.eval(&expr)?;

    context.record(value);
    Ok(value)
}
