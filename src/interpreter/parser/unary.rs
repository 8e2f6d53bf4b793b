use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (which is consumed
/// and discarded). Both recurse into this rule, so chains like `--5` parse
/// as negation of negation.
///
/// When no prefix operator is present, the function delegates to the
/// exponentiation level. Because negation is applied *around* that level,
/// `-2 ^ 2` parses as `-(2 ^ 2)`, never `(-2) ^ 2`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryMinus`] node or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, end)?;
        Ok(Expr::UnaryMinus { expr: Box::new(expr) })
    } else if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        parse_unary(tokens, end)
    } else {
        parse_power(tokens, end)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - history references (`$n`)
/// - variable references
/// - function calls
/// - parenthesized expressions
///
/// A function call is recognized only here: an identifier immediately
/// followed by `(` is a call; otherwise the identifier is a variable
/// reference.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | HISTORY_REF
///              | IDENTIFIER
///              | IDENTIFIER "(" args ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { pos: end })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..), _) => parse_literal(tokens),
        (Token::HistoryRef(..), _) => parse_history_ref(tokens),
        (Token::LParen, _) => parse_grouping(tokens, end),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, end),
        (tok, pos) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                        pos:   *pos, }),
    }
}

/// Parses a numeric literal.
///
/// The scanner has already decided the representation: digits-only literals
/// arrive as `Integer`, anything with a decimal point or exponent as `Real`.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Expr::Literal { value: (*n).into() }),
        Some((Token::Real(r), _)) => Ok(Expr::Literal { value: (*r).into() }),
        _ => unreachable!(),
    }
}

/// Parses a history reference token into a node.
///
/// The 1-based index was extracted by the scanner. Index 0 parses
/// successfully; range checking, including the zero case, is an evaluation
/// concern because only the context knows the history length.
fn parse_history_ref<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::HistoryRef(index), _)) => Ok(Expr::HistoryRef { index: *index }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The inner expression is returned as-is (no wrapper node); a missing `)`
/// is reported at the token that appears in its place, or just past the
/// input when nothing follows.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens, end)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, pos)) => Err(ParseError::ExpectedClosingParen { pos: *pos }),
        None => Err(ParseError::ExpectedClosingParen { pos: end }),
    }
}

/// Parses an identifier into a variable reference or a function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token. If the next token is
/// `(`, a call with zero or more comma-separated arguments is parsed;
/// otherwise the identifier is a variable reference. The parser does not
/// check whether the name is a known function or variable; that is resolved
/// during evaluation.
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the closing `)`
/// is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.next() {
        Some((Token::Identifier(n), _)) => n.clone(),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens,
                                                  |tokens| parse_expression(tokens, end),
                                                  &Token::RParen,
                                                  end)?;
            Ok(Expr::FunctionCall { name, arguments })
        },
        _ => Ok(Expr::Variable { name }),
    }
}
