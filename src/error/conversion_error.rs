use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while configuring a converter or
/// converting a numeral.
pub enum ConversionError {
    /// The alphabet and radix range do not fit together.
    #[error("Invalid configuration: {details}.")]
    InvalidConfiguration {
        /// Details describing why the configuration is invalid.
        details: String,
    },
    /// A radix was outside of the configured range.
    #[error("Radix {radix} is outside of the allowed range {min}..={max}.")]
    RadixOutOfRange {
        /// The requested radix.
        radix: u32,
        /// The smallest allowed radix.
        min:   u32,
        /// The largest allowed radix.
        max:   u32,
    },
    /// A numeral contained a symbol that is not part of the alphabet.
    #[error("The alphabet doesn't contain symbol '{symbol}'.")]
    UnknownSymbol {
        /// The unknown symbol.
        symbol: char,
    },
    /// A digit value has no symbol in the alphabet.
    #[error("Digit value {value} is not below the alphabet length {len}.")]
    ValueOutOfAlphabet {
        /// The digit value.
        value: u32,
        /// The number of symbols in the alphabet.
        len:   usize,
    },
    /// A symbol is known but too large for the radix it is read in.
    #[error("Symbol '{symbol}' is not a digit in radix {radix}.")]
    DigitOutOfRange {
        /// The offending symbol.
        symbol: char,
        /// The radix the symbol was read in.
        radix:  u32,
    },
    /// The integer part does not fit into the integer pivot.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// The numeral has no integer part.
    #[error("Malformed numeral '{numeral}'.")]
    MalformedNumeral {
        /// The numeral as given.
        numeral: String,
    },
}
