use tracing::{debug, trace};

use crate::{
    converter::{
        alphabet::Alphabet,
        numeral::{Numeral, SEPARATOR},
    },
    error::ConversionError,
};

/// Result type shared by every converter operation.
pub type ConvertResult<T> = Result<T, ConversionError>;

/// Smallest radix of the default configuration (tally).
pub const DEFAULT_MIN_RADIX: u32 = 1;
/// Largest radix of the default configuration.
pub const DEFAULT_MAX_RADIX: u32 = 36;
/// Smallest radix with a positional notation.
pub const MIN_POSITIONAL_RADIX: u32 = 2;

/// Converts numerals between radixes over a fixed alphabet.
///
/// A converter is configured once and holds no state between calls, so a
/// single instance can be shared freely, including across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    min_radix: u32,
    max_radix: u32,
    alphabet:  Alphabet,
}

impl Converter {
    /// Creates a converter accepting radixes in `min_radix..=max_radix`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `min_radix` is 0, if `min_radix`
    /// exceeds `max_radix`, or if `max_radix` exceeds the alphabet length.
    ///
    /// # Example
    /// ```
    /// use radixa::{
    ///     converter::{alphabet::Alphabet, core::Converter},
    ///     error::ConversionError,
    /// };
    ///
    /// let octal = Converter::new(2, 8, Alphabet::new("01234567").unwrap()).unwrap();
    /// assert_eq!(octal.convert("17", 8, 2).unwrap(), "1111");
    ///
    /// let err = Converter::new(1, 37, Alphabet::default()).unwrap_err();
    /// assert!(matches!(err, ConversionError::InvalidConfiguration { .. }));
    /// ```
    pub fn new(min_radix: u32, max_radix: u32, alphabet: Alphabet) -> ConvertResult<Self> {
        let exceeds_alphabet = !usize::try_from(max_radix).is_ok_and(|max| max <= alphabet.len());

        let details = if exceeds_alphabet {
            format!("the maximum radix is greater than the length of the alphabet: {max_radix} > {}",
                    alphabet.len())
        } else if min_radix > max_radix {
            format!("the minimum radix is greater than the maximum radix: {min_radix} > {max_radix}")
        } else if min_radix == 0 {
            "the minimum radix must be at least 1".to_string()
        } else {
            return Ok(Self { min_radix,
                             max_radix,
                             alphabet });
        };

        Err(ConversionError::InvalidConfiguration { details })
    }

    /// Returns the smallest accepted radix.
    #[must_use]
    pub const fn min_radix(&self) -> u32 {
        self.min_radix
    }

    /// Returns the largest accepted radix.
    #[must_use]
    pub const fn max_radix(&self) -> u32 {
        self.max_radix
    }

    /// Returns the symbol alphabet.
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Checks that `radix` lies within the configured range.
    ///
    /// # Example
    /// ```
    /// use radixa::{converter::core::Converter, error::ConversionError};
    ///
    /// let converter = Converter::default();
    /// assert!(converter.require_radix_in_range(36).is_ok());
    /// assert_eq!(converter.require_radix_in_range(37).unwrap_err(),
    ///            ConversionError::RadixOutOfRange { radix: 37,
    ///                                               min:   1,
    ///                                               max:   36, });
    /// ```
    pub const fn require_radix_in_range(&self, radix: u32) -> ConvertResult<()> {
        if radix < self.min_radix || radix > self.max_radix {
            return Err(ConversionError::RadixOutOfRange { radix,
                                                          min: self.min_radix,
                                                          max: self.max_radix });
        }
        Ok(())
    }

    /// Checks that `radix` is in range and has a positional notation, i.e. is
    /// not the tally radix 1.
    pub(crate) const fn require_positional_radix(&self, radix: u32) -> ConvertResult<()> {
        if radix < MIN_POSITIONAL_RADIX {
            let min = if self.min_radix > MIN_POSITIONAL_RADIX {
                self.min_radix
            } else {
                MIN_POSITIONAL_RADIX
            };
            return Err(ConversionError::RadixOutOfRange { radix,
                                                          min,
                                                          max: self.max_radix });
        }
        self.require_radix_in_range(radix)
    }

    /// Reads `symbol` as a digit of `radix`.
    pub(crate) fn digit_value(&self, symbol: char, radix: u32) -> ConvertResult<u32> {
        let value = self.alphabet.value_of(symbol)?;
        if value >= radix {
            return Err(ConversionError::DigitOutOfRange { symbol, radix });
        }
        Ok(value)
    }

    /// Converts `source` from `source_radix` to `target_radix`.
    ///
    /// If either radix is 1 the numeral is treated as a tally and anything
    /// after the decimal point is dropped. Otherwise the integer part and the
    /// optional fractional part are converted separately through a decimal
    /// pivot and joined with a `.`. The fractional part of the result always
    /// has exactly five digits.
    ///
    /// # Errors
    /// Fails with the first violated precondition: a radix out of range, a
    /// malformed numeral, an unknown symbol, a symbol that is not a digit of
    /// `source_radix`, or an integer part that overflows `u64`.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::core::Converter;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.convert("ff", 16, 10).unwrap(), "255");
    /// assert_eq!(converter.convert("10.5", 10, 2).unwrap(), "1010.10000");
    /// assert_eq!(converter.convert("3", 10, 1).unwrap(), "111");
    /// assert!(converter.convert("5", 37, 10).is_err());
    /// ```
    pub fn convert(&self, source: &str, source_radix: u32, target_radix: u32) -> ConvertResult<String> {
        self.require_radix_in_range(source_radix)?;
        self.require_radix_in_range(target_radix)?;

        if source_radix == 1 || target_radix == 1 {
            debug!(source, source_radix, target_radix, "converting through tally");
            return self.convert_by_one(source, source_radix, target_radix);
        }

        let numeral = Numeral::parse(source)?;

        let integer = self.to_decimal_integer(numeral.integer(), source_radix)?;
        trace!(integer, "decoded integer part");
        let converted_integer = self.from_decimal_integer(integer, target_radix)?;

        let Some(fractional_part) = numeral.fraction() else {
            debug!(source, source_radix, target_radix, "converted integer numeral");
            return Ok(converted_integer);
        };

        let fraction = self.fraction_value(fractional_part, source_radix)?;
        trace!(fraction, "decoded fractional part");
        let converted_fraction = self.fraction_digits(fraction, target_radix)?;

        debug!(source, source_radix, target_radix, "converted fractional numeral");
        Ok(format!("{converted_integer}{SEPARATOR}{converted_fraction}"))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self { min_radix: DEFAULT_MIN_RADIX,
               max_radix: DEFAULT_MAX_RADIX,
               alphabet:  Alphabet::default(), }
    }
}
