#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Positions are 0-based character offsets into the input line, taken from
/// the token that triggered the failure.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The literal text of the token encountered.
        token: String,
        /// Offset of the token's first character.
        pos:   usize,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput {
        /// Offset just past the last character of the input.
        pos: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Offset where `)` was expected.
        pos: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// Offset of the extra token.
        pos:   usize,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Unexpected token '{token}' at position {pos}.")
            },

            Self::UnexpectedEndOfInput { pos } => {
                write!(f, "Unexpected end of input at position {pos}.")
            },

            Self::ExpectedClosingParen { pos } => {
                write!(f, "Expected closing parenthesis ')' at position {pos}.")
            },

            Self::UnexpectedTrailingTokens { token, pos } => {
                write!(f, "Extra token '{token}' after expression at position {pos}.")
            },

            Self::EmptyExpression => write!(f, "Empty expression."),
        }
    }
}

impl std::error::Error for ParseError {}
