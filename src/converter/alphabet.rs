use std::collections::HashSet;

use crate::{converter::core::ConvertResult, error::ConversionError};

/// Digits `0`-`9` followed by the lowercase letters `a`-`z`.
pub const DEFAULT_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// An ordered set of unique symbols, where the symbol at position `i` denotes
/// the digit value `i`.
///
/// An alphabet is immutable once built and always holds at least one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `symbols` is empty or contains the
    /// same character twice.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::alphabet::Alphabet;
    ///
    /// let binary = Alphabet::new("01").unwrap();
    /// assert_eq!(binary.len(), 2);
    ///
    /// assert!(Alphabet::new("0120").is_err());
    /// assert!(Alphabet::new("").is_err());
    /// ```
    pub fn new(symbols: &str) -> ConvertResult<Self> {
        if symbols.is_empty() {
            return Err(ConversionError::InvalidConfiguration { details:
                                                                   "the alphabet is empty".to_string() });
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = symbols.chars().find(|&c| !seen.insert(c)) {
            return Err(ConversionError::InvalidConfiguration { details: format!("the alphabet contains '{duplicate}' more than once") });
        }

        Ok(Self { symbols: symbols.chars().collect() })
    }

    /// Returns the number of symbols, which is also the largest radix this
    /// alphabet can express.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols, which construction rules
    /// out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol for digit value 0.
    #[must_use]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Returns the digit value of `symbol`, its zero-based position in the
    /// alphabet.
    ///
    /// # Example
    /// ```
    /// use radixa::{converter::alphabet::Alphabet, error::ConversionError};
    ///
    /// let alphabet = Alphabet::default();
    /// assert_eq!(alphabet.value_of('f').unwrap(), 15);
    /// assert_eq!(alphabet.value_of('F').unwrap_err(),
    ///            ConversionError::UnknownSymbol { symbol: 'F' });
    /// ```
    pub fn value_of(&self, symbol: char) -> ConvertResult<u32> {
        let position = self.symbols
                           .iter()
                           .position(|&s| s == symbol)
                           .ok_or(ConversionError::UnknownSymbol { symbol })?;

        u32::try_from(position).map_err(|_| ConversionError::Overflow)
    }

    /// Returns the symbol that denotes the digit `value`.
    ///
    /// # Example
    /// ```
    /// use radixa::{converter::alphabet::Alphabet, error::ConversionError};
    ///
    /// let alphabet = Alphabet::default();
    /// assert_eq!(alphabet.symbol_of(35).unwrap(), 'z');
    /// assert_eq!(alphabet.symbol_of(36).unwrap_err(),
    ///            ConversionError::ValueOutOfAlphabet { value: 36, len: 36 });
    /// ```
    pub fn symbol_of(&self, value: u32) -> ConvertResult<char> {
        usize::try_from(value).ok()
                              .and_then(|index| self.symbols.get(index))
                              .copied()
                              .ok_or(ConversionError::ValueOutOfAlphabet { value,
                                                                           len: self.len() })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self { symbols: DEFAULT_SYMBOLS.chars().collect() }
    }
}
