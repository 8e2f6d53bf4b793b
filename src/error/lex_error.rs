#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while scanning input into tokens.
///
/// Every variant records the 0-based character offset where the problem
/// starts, so callers can point at the exact spot in the input line.
pub enum LexError {
    /// An exponent marker (`e`/`E`) was not followed by any digits.
    InvalidExponent {
        /// Offset of the exponent marker.
        pos: usize,
    },
    /// A `$` was not followed by a digit.
    UnterminatedHistoryRef {
        /// Offset of the `$` character.
        pos: usize,
    },
    /// A history reference index overflows the machine word.
    HistoryIndexTooLarge {
        /// Offset of the first digit of the index.
        pos: usize,
    },
    /// A character that no token can start with.
    UnexpectedCharacter {
        /// The offending character.
        ch:  char,
        /// Offset of the character.
        pos: usize,
    },
}

impl LexError {
    /// Returns the 0-based character offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidExponent { pos }
            | Self::UnterminatedHistoryRef { pos }
            | Self::HistoryIndexTooLarge { pos }
            | Self::UnexpectedCharacter { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExponent { pos } => {
                write!(f, "Invalid scientific notation at position {pos}: expected digits after exponent.")
            },
            Self::UnterminatedHistoryRef { pos } => {
                write!(f, "Expected digits after '$' at position {pos}.")
            },
            Self::HistoryIndexTooLarge { pos } => {
                write!(f, "History reference index at position {pos} is too large.")
            },
            Self::UnexpectedCharacter { ch, pos } => {
                write!(f, "Unexpected character '{ch}' at position {pos}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
