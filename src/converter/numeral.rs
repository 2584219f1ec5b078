use crate::{converter::core::ConvertResult, error::ConversionError};

/// The decimal point separating the integer part from the fractional part.
pub const SEPARATOR: char = '.';

/// A numeral split at its decimal point.
///
/// Both parts borrow from the source text. The symbols themselves are not
/// checked here; that happens when the parts are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral<'a> {
    integer:  &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Numeral<'a> {
    /// Splits `source` at its first decimal point.
    ///
    /// A trailing decimal point yields an empty fractional part, which is
    /// distinct from having no fractional part at all.
    ///
    /// # Errors
    /// Returns `MalformedNumeral` if the integer part is empty or the numeral
    /// contains more than one decimal point.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::numeral::Numeral;
    ///
    /// let numeral = Numeral::parse("10.5").unwrap();
    /// assert_eq!(numeral.integer(), "10");
    /// assert_eq!(numeral.fraction(), Some("5"));
    ///
    /// assert_eq!(Numeral::parse("10.").unwrap().fraction(), Some(""));
    /// assert_eq!(Numeral::parse("ff").unwrap().fraction(), None);
    /// assert!(Numeral::parse(".5").is_err());
    /// assert!(Numeral::parse("1.2.3").is_err());
    /// ```
    pub fn parse(source: &'a str) -> ConvertResult<Self> {
        let malformed = || ConversionError::MalformedNumeral { numeral: source.to_string() };

        let (integer, fraction) = match source.split_once(SEPARATOR) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (source, None),
        };

        if integer.is_empty() || fraction.is_some_and(|f| f.contains(SEPARATOR)) {
            return Err(malformed());
        }

        Ok(Self { integer, fraction })
    }

    /// Returns the digits before the decimal point.
    #[must_use]
    pub const fn integer(&self) -> &'a str {
        self.integer
    }

    /// Returns the digits after the decimal point, if there is one.
    #[must_use]
    pub const fn fraction(&self) -> Option<&'a str> {
        self.fraction
    }
}

/// Returns the part of `source` before its first decimal point, or all of it.
///
/// # Example
/// ```
/// use radixa::converter::numeral::integer_part;
///
/// assert_eq!(integer_part("111.01"), "111");
/// assert_eq!(integer_part("111"), "111");
/// assert_eq!(integer_part(".1"), "");
/// ```
#[must_use]
pub fn integer_part(source: &str) -> &str {
    source.split_once(SEPARATOR).map_or(source, |(integer, _)| integer)
}
