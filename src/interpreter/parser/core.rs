use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into one expression tree.
///
/// This is the entry point for parsing. The whole sequence must form a
/// single expression: an empty sequence and leftover tokens after a complete
/// expression are both errors.
///
/// # Parameters
/// - `tokens`: Positioned tokens, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `end`: The input length; errors at exhausted input point here, one
///   past the last character.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `EmptyExpression` if the sequence contains no tokens.
/// - `UnexpectedTrailingTokens` if tokens remain after a full expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let input = "1 + 2 * 3";
/// let tokens = tokenize(input).unwrap();
/// assert!(parse(&tokens, input.len()).is_ok());
/// ```
pub fn parse(tokens: &[(Token, usize)], end: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(&mut iter, end)?;

    if let Some((token, pos)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          pos:   *pos, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, pos)` pairs.
/// - `end`: Offset just past the input, for exhausted-input diagnostics.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens, end)
}

/// Parses an assignment or falls through to the additive level.
///
/// An assignment is recognized by a two-token lookahead: an identifier
/// immediately followed by `=`. Because the right-hand side recurses into
/// `expression`, assignments are right-associative and may nest
/// (`y = x = 5`). The target must be a bare identifier; any other shape
/// falls through to the arithmetic grammar and `=` there becomes an
/// unexpected token.
///
/// Grammar: `assignment := IDENTIFIER "=" expression | additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead. The `Clone` bound provides the
///   second lookahead token without consuming the stream.
///
/// # Returns
/// An `Expr::Assignment` node, or whatever the additive level produces.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, _)) = lookahead.peek() {
            let name = name.clone();
            tokens.next(); // identifier
            tokens.next(); // '='

            let value = parse_expression(tokens, end)?;
            return Ok(Expr::Assignment { name,
                                         value: Box::new(value) });
        }
    }

    parse_additive(tokens, end)
}
