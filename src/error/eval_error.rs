#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
///
/// Evaluation errors carry no source offset: by the time the tree is walked,
/// the failing operation is identified by name or by the values involved.
pub enum EvalError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not built in.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human-readable description of the accepted count ("1", "at
        /// least 2").
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// An argument was outside a function's domain.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A `$n` reference pointed outside the current history.
    HistoryOutOfRange {
        /// The requested 1-based index.
        index: usize,
        /// The current history length.
        len:   usize,
    },
    /// Tried to assign to a protected constant (`pi`, `e`).
    ProtectedConstant {
        /// The name of the constant.
        name: String,
    },
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),

            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => {
                write!(f, "Function '{name}' expects {expected} argument(s), got {found}.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::ModuloByZero => write!(f, "Modulo by zero."),

            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),

            Self::HistoryOutOfRange { index, len } => {
                write!(f, "History reference ${index} is out of range (1..{len}).")
            },

            Self::ProtectedConstant { name } => {
                write!(f, "Cannot reassign built-in constant '{name}'.")
            },

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
