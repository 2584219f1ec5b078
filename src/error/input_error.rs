use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while reading the input lines.
pub enum InputError {
    /// Fewer than three lines were supplied.
    #[error("Expected 3 input lines but found {found}.")]
    MissingLines {
        /// The number of lines that were actually present.
        found: usize,
    },
    /// A radix line did not match the radix grammar.
    #[error("Error on line {line}: Malformed radix '{text}'.")]
    MalformedRadix {
        /// The offending text.
        text: String,
        /// The input line where the error occurred.
        line: usize,
    },
    /// The numeral line did not match the numeral grammar.
    #[error("Error on line {line}: Malformed numeral '{text}'.")]
    MalformedNumeral {
        /// The offending text.
        text: String,
        /// The input line where the error occurred.
        line: usize,
    },
}
