/// Lexical errors.
///
/// Defines all error types that can occur while scanning a line of source
/// text into tokens: malformed numbers, dangling history references, and
/// unrecognized characters. Every variant carries the 0-based character
/// offset of the offending input.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from the token stream. Parse errors include unexpected tokens, empty
/// input, and trailing tokens after a complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree: unknown names, arity mismatches, division by zero,
/// domain violations, and out-of-range history references.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced while evaluating one line of input.
///
/// Each evaluation phase has its own error type; this enum folds them into a
/// single type so the scan-parse-evaluate pipeline can be composed with `?`.
#[derive(Debug)]
pub enum Error {
    /// The scanner rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation of the expression tree failed.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
