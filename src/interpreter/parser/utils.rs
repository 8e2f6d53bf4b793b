use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// The list may be empty: an immediately encountered closing token produces
/// an empty vector. Otherwise items are parsed with `parse_item`, each
/// followed by either a comma (continue) or the closing token (stop).
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or the closing
///   token.
/// - `parse_item`: Function used to parse one list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
/// - `end`: Offset just past the input, reported when the input ends before
///   the list is closed.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token
/// appears between items, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    end: usize)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, pos)) => {
                return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         pos:   *pos, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { pos: end }),
        }
    }
    Ok(items)
}
