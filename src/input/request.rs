use tracing::debug;

use crate::{
    converter::core::{ConvertResult, Converter},
    error::InputError,
    input::lexer::{NumeralToken, RadixToken, lex_line},
};

/// Number of input lines making up one request.
pub const REQUEST_LINES: usize = 3;

/// A conversion request whose three lines have been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// The radix the numeral is written in.
    pub source_radix: u32,
    /// The numeral to convert.
    pub numeral:      String,
    /// The radix to convert into.
    pub target_radix: u32,
}

impl ConversionRequest {
    /// Reads a request from the first three lines of `input`.
    ///
    /// Lines may end in `\n` or `\r\n`; anything after the third line is
    /// ignored.
    ///
    /// # Errors
    /// Returns `MissingLines` if fewer than three lines are present, otherwise
    /// `MalformedRadix` or `MalformedNumeral` for the first line that does not
    /// match its grammar.
    ///
    /// # Example
    /// ```
    /// use radixa::{error::InputError, input::request::ConversionRequest};
    ///
    /// let request = ConversionRequest::parse("16\nff\n10\n").unwrap();
    /// assert_eq!(request.source_radix, 16);
    /// assert_eq!(request.numeral, "ff");
    /// assert_eq!(request.target_radix, 10);
    ///
    /// assert_eq!(ConversionRequest::parse("16\nff").unwrap_err(),
    ///            InputError::MissingLines { found: 2 });
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let lines: Vec<&str> = input.lines().take(REQUEST_LINES).collect();

        let [source_radix, numeral, target_radix] = lines[..] else {
            return Err(InputError::MissingLines { found: lines.len() });
        };

        Ok(Self { source_radix: parse_radix(source_radix, 1)?,
                  numeral:      parse_numeral(numeral, 2)?,
                  target_radix: parse_radix(target_radix, 3)?, })
    }

    /// Runs the request against `converter`.
    pub fn execute(&self, converter: &Converter) -> ConvertResult<String> {
        debug!(numeral = %self.numeral,
               source_radix = self.source_radix,
               target_radix = self.target_radix,
               "executing request");
        converter.convert(&self.numeral, self.source_radix, self.target_radix)
    }
}

fn parse_radix(text: &str, line: usize) -> Result<u32, InputError> {
    match lex_line::<RadixToken>(text) {
        Some(RadixToken::Radix(radix)) => Ok(radix),
        None => Err(InputError::MalformedRadix { text: text.to_string(),
                                                 line }),
    }
}

fn parse_numeral(text: &str, line: usize) -> Result<String, InputError> {
    match lex_line::<NumeralToken>(text) {
        Some(NumeralToken::Numeral) => Ok(text.to_string()),
        None => Err(InputError::MalformedNumeral { text: text.to_string(),
                                                   line }),
    }
}
