/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (scanner) reads one line of raw text and produces a sequence of
/// tokens, each a meaningful language element such as a number, identifier,
/// operator, or history reference, paired with its character offset. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles numeric literals in integer, decimal, and scientific forms.
/// - Reports lexical errors for malformed or unrecognized input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an immutable expression tree whose shape encodes operator
/// precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured expression nodes.
/// - Validates the grammar, reporting errors with exact source offsets.
/// - Recognizes assignments, function calls, and history references.
pub mod parser;
/// The value module defines the runtime numeric types.
///
/// Declares the two numeric representations used during evaluation (exact
/// integer and floating-point real) and their conversion rules.
///
/// # Responsibilities
/// - Defines the `Value` enum.
/// - Provides promotion from integer to real.
pub mod value;
/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the tree, performs arithmetic with the promotion
/// rules, dispatches built-in function calls, and manages the session
/// context of variables and history. It is the core execution engine.
///
/// # Responsibilities
/// - Evaluates expression nodes, performing all supported operations.
/// - Owns the evaluation context: variables, constants, history.
/// - Reports evaluation errors such as division by zero or unknown names.
pub mod evaluator;
