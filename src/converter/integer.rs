use crate::{
    converter::core::{ConvertResult, Converter},
    error::ConversionError,
    util::num::u64_to_u32_checked,
};

impl Converter {
    /// Decodes a big-endian digit string in `radix` into its value.
    ///
    /// The value is accumulated in a `u64`; anything larger fails instead of
    /// wrapping around.
    ///
    /// # Errors
    /// - `RadixOutOfRange` if `radix` is 1 or outside the configured range.
    /// - `MalformedNumeral` if `digits` is empty.
    /// - `UnknownSymbol` or `DigitOutOfRange` for a symbol that is not a digit
    ///   of `radix`.
    /// - `Overflow` if the value exceeds `u64::MAX`.
    ///
    /// # Example
    /// ```
    /// use radixa::{converter::core::Converter, error::ConversionError};
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.to_decimal_integer("ff", 16).unwrap(), 255);
    /// assert_eq!(converter.to_decimal_integer("zzzzzzzzzzzzz", 36).unwrap_err(),
    ///            ConversionError::Overflow);
    /// assert_eq!(converter.to_decimal_integer("f", 10).unwrap_err(),
    ///            ConversionError::DigitOutOfRange { symbol: 'f',
    ///                                               radix:  10, });
    /// ```
    pub fn to_decimal_integer(&self, digits: &str, radix: u32) -> ConvertResult<u64> {
        self.require_positional_radix(radix)?;

        if digits.is_empty() {
            return Err(ConversionError::MalformedNumeral { numeral: digits.to_string() });
        }

        let base = u64::from(radix);
        digits.chars().try_fold(0u64, |sum, symbol| {
                          let digit = u64::from(self.digit_value(symbol, radix)?);
                          sum.checked_mul(base)
                             .and_then(|shifted| shifted.checked_add(digit))
                             .ok_or(ConversionError::Overflow)
                      })
    }

    /// Encodes `value` as a big-endian digit string in `radix`.
    ///
    /// Remainders of repeated division are collected least significant first.
    /// The loop stops as soon as the quotient drops below `radix`, and a
    /// non-zero final quotient becomes the leading digit. Zero encodes as the
    /// single zero symbol.
    ///
    /// # Errors
    /// Returns `RadixOutOfRange` if `radix` is 1 or outside the configured
    /// range.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::core::Converter;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.from_decimal_integer(255, 16).unwrap(), "ff");
    /// assert_eq!(converter.from_decimal_integer(256, 16).unwrap(), "100");
    /// assert_eq!(converter.from_decimal_integer(0, 2).unwrap(), "0");
    /// ```
    pub fn from_decimal_integer(&self, value: u64, radix: u32) -> ConvertResult<String> {
        self.require_positional_radix(radix)?;

        let base = u64::from(radix);
        let symbol_for = |digit: u64| -> ConvertResult<char> {
            self.alphabet().symbol_of(u64_to_u32_checked(digit)?)
        };

        let mut symbols = Vec::new();
        let mut dividend = value;
        loop {
            symbols.push(symbol_for(dividend % base)?);
            dividend /= base;
            if dividend < base {
                break;
            }
        }
        if dividend != 0 {
            symbols.push(symbol_for(dividend)?);
        }

        Ok(symbols.into_iter().rev().collect())
    }
}
