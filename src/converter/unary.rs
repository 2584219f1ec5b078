use crate::{
    converter::{
        core::{ConvertResult, Converter},
        numeral::integer_part,
    },
    error::ConversionError,
    util::num::{u64_to_usize_checked, usize_to_u64_checked},
};

/// The symbol repeated to write a number in radix 1.
pub const TALLY_SYMBOL: char = '1';
/// Longest tally that will be written out (16 MiB).
pub const MAX_TALLY_LEN: usize = 1 << 24;

impl Converter {
    /// Converts a numeral when either radix is 1.
    ///
    /// Only the integer part is considered; anything after the first decimal
    /// point is dropped. A radix-1 source counts its symbols, whatever they
    /// are. A radix-1 target repeats [`TALLY_SYMBOL`] once per unit, so zero
    /// becomes the empty string. The other side uses the positional integer
    /// conversion.
    ///
    /// # Errors
    /// Returns `RadixOutOfRange` for a radix outside the configured range, and
    /// any error of the positional integer conversion. `MalformedNumeral` is
    /// returned for an empty integer part in a positional source radix, and
    /// `Overflow` for a tally longer than [`MAX_TALLY_LEN`] or one that cannot
    /// be allocated.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::core::Converter;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.convert_by_one("abcd", 1, 10).unwrap(), "4");
    /// assert_eq!(converter.convert_by_one("101.9", 2, 1).unwrap(), "11111");
    /// assert_eq!(converter.convert_by_one("0.5", 10, 1).unwrap(), "");
    /// ```
    pub fn convert_by_one(&self, source: &str, source_radix: u32, target_radix: u32) -> ConvertResult<String> {
        self.require_radix_in_range(source_radix)?;
        self.require_radix_in_range(target_radix)?;

        let integer = integer_part(source);
        let value = if source_radix == 1 {
            usize_to_u64_checked(integer.chars().count())?
        } else if integer.is_empty() {
            return Err(ConversionError::MalformedNumeral { numeral: source.to_string() });
        } else {
            self.to_decimal_integer(integer, source_radix)?
        };

        if target_radix == 1 {
            write_tally(u64_to_usize_checked(value)?)
        } else {
            self.from_decimal_integer(value, target_radix)
        }
    }
}

/// Writes `count` tally symbols, refusing anything above [`MAX_TALLY_LEN`]
/// instead of letting the allocator abort.
fn write_tally(count: usize) -> ConvertResult<String> {
    if count > MAX_TALLY_LEN {
        return Err(ConversionError::Overflow);
    }

    let mut tally = String::new();
    tally.try_reserve_exact(count)
         .map_err(|_| ConversionError::Overflow)?;
    tally.extend(std::iter::repeat_n(TALLY_SYMBOL, count));
    Ok(tally)
}
