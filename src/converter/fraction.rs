use crate::{
    converter::core::{ConvertResult, Converter},
    util::num::truncate_to_digit,
};

/// Number of digits emitted for every fractional part.
pub const FRACTION_DIGITS: usize = 5;

impl Converter {
    /// Decodes the digits after a decimal point into a fraction in `[0, 1)`.
    ///
    /// Digits are read most significant first and accumulated in an `f64`, so
    /// the usual binary floating point rounding applies.
    ///
    /// # Errors
    /// `RadixOutOfRange` for radix 1 or a radix outside the configured range,
    /// `UnknownSymbol` or `DigitOutOfRange` for a symbol that is not a digit of
    /// `radix`.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::core::Converter;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.fraction_value("8", 16).unwrap(), 0.5);
    /// assert_eq!(converter.fraction_value("01", 2).unwrap(), 0.25);
    /// assert_eq!(converter.fraction_value("", 10).unwrap(), 0.0);
    /// ```
    pub fn fraction_value(&self, digits: &str, radix: u32) -> ConvertResult<f64> {
        self.require_positional_radix(radix)?;

        let base = f64::from(radix);
        let mut power = 1.0;
        let mut sum = 0.0;
        for symbol in digits.chars() {
            let digit = self.digit_value(symbol, radix)?;
            power *= base;
            sum += f64::from(digit) / power;
        }
        Ok(sum)
    }

    /// Encodes `fraction` as exactly [`FRACTION_DIGITS`] digits in `radix`.
    ///
    /// Each step multiplies the remaining fraction by `radix`, truncates the
    /// product to the next digit and keeps the product's fractional part.
    /// Results are truncated, never rounded, and trailing zeros are kept.
    ///
    /// # Errors
    /// Returns `RadixOutOfRange` for radix 1 or a radix outside the configured
    /// range.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::core::Converter;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.fraction_digits(0.5, 2).unwrap(), "10000");
    /// assert_eq!(converter.fraction_digits(0.1, 2).unwrap(), "00011");
    /// assert_eq!(converter.fraction_digits(0.0, 36).unwrap(), "00000");
    /// ```
    pub fn fraction_digits(&self, fraction: f64, radix: u32) -> ConvertResult<String> {
        self.require_positional_radix(radix)?;

        let base = f64::from(radix);
        let mut multiplier = fraction;
        (0..FRACTION_DIGITS).map(|_| {
                                multiplier *= base;
                                let digit = truncate_to_digit(multiplier, radix);
                                multiplier -= multiplier.trunc();
                                self.alphabet().symbol_of(digit)
                            })
                            .collect()
    }
}
