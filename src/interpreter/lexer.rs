use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. The lexer knows
/// nothing about grammar: identifiers are not classified into variables or
/// function names here, and `$n` is carried as a raw 1-based index.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, or `2.1e-10`.
    ///
    /// The exponent digits are matched permissively (`[0-9]*`) so that a
    /// dangling marker like `2e+` is consumed as one slice and rejected by
    /// the callback, instead of lexing as `2` followed by stray tokens.
    #[regex(r"([0-9]+\.[0-9]+|\.[0-9]+)([eE][+-]?[0-9]*)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// History reference tokens, such as `$3`.
    #[regex(r"\$[0-9]+", parse_history_ref)]
    HistoryRef(usize),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::HistoryRef(index) => write!(f, "${index}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Scans one line of source text into a positioned token sequence.
///
/// Each token is paired with the 0-based character offset of its first
/// character. Whitespace is skipped and never significant. Scanning stops at
/// the first error; there is no recovery.
///
/// # Parameters
/// - `input`: The line of text to scan.
///
/// # Returns
/// The materialized token sequence, in source order.
///
/// # Errors
/// - `LexError::InvalidExponent` if an `e`/`E` marker has no digits.
/// - `LexError::UnterminatedHistoryRef` if `$` is not followed by a digit.
/// - `LexError::HistoryIndexTooLarge` if a `$n` index overflows.
/// - `LexError::UnexpectedCharacter` for any unrecognized character.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 0), (Token::Plus, 2), (Token::Integer(2), 4)]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let pos = lexer.span().start;
        let slice = lexer.slice();
        match token {
            Ok(tok) => tokens.push((tok, pos)),
            // A digits-only slice is an integer literal beyond i64: it
            // overflows into the real representation instead of failing.
            Err(()) if slice.chars().all(|c| c.is_ascii_digit()) => {
                match slice.parse() {
                    Ok(value) => tokens.push((Token::Real(value), pos)),
                    Err(_) => return Err(classify_error(slice, pos)),
                }
            },
            Err(()) => return Err(classify_error(slice, pos)),
        }
    }

    Ok(tokens)
}

/// Maps a rejected slice to the `LexError` that describes it.
///
/// The lexer itself only reports "no match" with a span; this function looks
/// at the slice to decide which rule was violated:
/// - a lone `$` means a history reference without digits,
/// - a `$` with digits means the index overflowed,
/// - digits with an `e`/`E` mean a malformed exponent, positioned at the
///   marker,
/// - anything else is an unrecognized character.
fn classify_error(slice: &str, pos: usize) -> LexError {
    if let Some(rest) = slice.strip_prefix('$') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return LexError::HistoryIndexTooLarge { pos: pos + 1 };
        }
        return LexError::UnterminatedHistoryRef { pos };
    }

    if slice.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.')
       && let Some(marker) = slice.find(['e', 'E'])
    {
        return LexError::InvalidExponent { pos: pos + marker };
    }

    LexError::UnexpectedCharacter { ch: slice.chars().next().unwrap_or('\0'),
                                    pos }
}

/// Parses a floating-point literal from the current token slice.
///
/// Rejects slices whose exponent marker is not followed by at least one
/// digit; the permissive regex admits them so they surface as lexical errors
/// rather than splitting into separate tokens.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`; `tokenize` then
///   re-reads the slice as a real instead.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses the index of a history reference from the current token slice.
///
/// The slice always starts with `$` followed by one or more digits; only the
/// digits are parsed. A `$0` reference lexes successfully and is rejected at
/// evaluation time, where the valid range is known.
///
/// # Returns
/// - `Some(usize)`: The 1-based history index.
/// - `None`: If the digits overflow `usize`.
fn parse_history_ref(lex: &logos::Lexer<Token>) -> Option<usize> {
    lex.slice()[1..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_exact() {
        let tokens = tokenize("12 + foo(3)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, p)| *p).collect();
        assert_eq!(positions, vec![0, 3, 5, 8, 9, 10]);
    }

    #[test]
    fn real_literal_forms() {
        assert_eq!(tokenize("3.14").unwrap(), vec![(Token::Real(3.14), 0)]);
        assert_eq!(tokenize(".5").unwrap(), vec![(Token::Real(0.5), 0)]);
        assert_eq!(tokenize("2e3").unwrap(), vec![(Token::Real(2000.0), 0)]);
        assert_eq!(tokenize("1.5E-2").unwrap(), vec![(Token::Real(0.015), 0)]);
    }

    #[test]
    fn missing_exponent_digits_point_at_the_marker() {
        assert_eq!(tokenize("10 + 2e"),
                   Err(LexError::InvalidExponent { pos: 6 }));
        assert_eq!(tokenize("1.5e+"), Err(LexError::InvalidExponent { pos: 3 }));
    }

    #[test]
    fn dollar_without_digits_is_rejected() {
        assert_eq!(tokenize("1 + $"),
                   Err(LexError::UnterminatedHistoryRef { pos: 4 }));
        assert_eq!(tokenize("$x"),
                   Err(LexError::UnterminatedHistoryRef { pos: 0 }));
    }

    #[test]
    fn unknown_characters_are_rejected_with_offset() {
        assert_eq!(tokenize("2 ? 3"),
                   Err(LexError::UnexpectedCharacter { ch: '?', pos: 2 }));
    }

    #[test]
    fn oversized_integer_literal_overflows_into_real() {
        assert_eq!(tokenize("99999999999999999999").unwrap(),
                   vec![(Token::Real(1e20), 0)]);
    }

    #[test]
    fn oversized_history_index_is_rejected() {
        assert_eq!(tokenize("$99999999999999999999999"),
                   Err(LexError::HistoryIndexTooLarge { pos: 1 }));
    }
}
