use logos::Logos;

/// A radix line: an integer from 1 to 36 without leading zeros.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RadixToken {
    /// Radix literals, such as `2`, `16` or `36`.
    #[regex(r"[1-9]|[12][0-9]|3[0-6]", parse_radix)]
    Radix(u32),
}

/// A numeral line: lowercase alphanumeric symbols with at most one decimal
/// point.
///
/// The integer part has no leading zero unless it is exactly `0`, in which case
/// a non-empty fractional part is required.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumeralToken {
    /// Numeral literals, such as `ff`, `10.5`, `10.` or `0.1`.
    #[regex(r"[1-9a-z][0-9a-z]*(\.[0-9a-z]*)?")]
    #[regex(r"0\.[0-9a-z]+")]
    Numeral,
}

/// Lexes `line` as exactly one token of type `T`.
///
/// # Returns
/// - `Some(T)`: The token, if it spans the whole line.
/// - `None`: If the line is empty, contains an unrecognised character, or
///   holds more than one token.
///
/// # Example
/// ```
/// use radixa::input::lexer::{NumeralToken, RadixToken, lex_line};
///
/// assert_eq!(lex_line::<RadixToken>("36"), Some(RadixToken::Radix(36)));
/// assert_eq!(lex_line::<RadixToken>("37"), None);
/// assert_eq!(lex_line::<RadixToken>("07"), None);
///
/// assert_eq!(lex_line::<NumeralToken>("0.5"), Some(NumeralToken::Numeral));
/// assert_eq!(lex_line::<NumeralToken>("05"), None);
/// assert_eq!(lex_line::<NumeralToken>("1.2.3"), None);
/// ```
pub fn lex_line<'a, T>(line: &'a str) -> Option<T>
    where T: Logos<'a, Source = str>,
          T::Extras: Default
{
    let mut lexer = T::lexer(line);
    let token = lexer.next()?.ok()?;
    let whole_line = lexer.span() == (0..line.len());

    (whole_line && lexer.next().is_none()).then_some(token)
}

/// Parses a radix literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(u32)`: The parsed radix if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_radix(lex: &logos::Lexer<RadixToken>) -> Option<u32> {
    lex.slice().parse().ok()
}
