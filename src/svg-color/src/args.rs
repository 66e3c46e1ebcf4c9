//! Splitting `name(arg, arg, ...)` into positional tokens.

use smallvec::SmallVec;

use crate::error::FormatFault;
use crate::lexer::Token;

/// Positional arguments of a functional notation. Colour functions take at
/// most four, so these never spill to the heap.
pub type Arguments<'a> = SmallVec<[Token<'a>; 4]>;

const SEPARATORS: [char; 2] = [',', ' '];

/// Returns the text between the first `(` and the first `)` after it.
/// Anything after the `)` is ignored.
pub fn argument_list(input: &str) -> Result<&str, FormatFault> {
    let open = input.find('(').ok_or(FormatFault::MissingParentheses)?;
    let rest = &input[open + 1..];
    let close = rest.find(')').ok_or(FormatFault::MissingParentheses)?;
    Ok(&rest[..close])
}

/// Splits on commas and spaces. Runs of separators collapse and every piece
/// is trimmed, so no empty tokens are produced.
pub fn split_arguments(list: &str) -> Arguments<'_> {
    list.split(SEPARATORS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Token::new)
        .collect()
}

/// [`argument_list`] followed by [`split_arguments`].
pub fn function_arguments(input: &str) -> Result<Arguments<'_>, FormatFault> {
    argument_list(input).map(split_arguments)
}
