use crate::{converter::core::ConvertResult, error::ConversionError};

/// Safely converts a `usize` length to the `u64` pivot.
///
/// ## Errors
/// Returns `ConversionError::Overflow` if the value does not fit into a `u64`.
///
/// ## Example
/// ```
/// use radixa::util::num::usize_to_u64_checked;
///
/// assert_eq!(usize_to_u64_checked(42).unwrap(), 42);
/// ```
pub fn usize_to_u64_checked(value: usize) -> ConvertResult<u64> {
    u64::try_from(value).map_err(|_| ConversionError::Overflow)
}

/// Safely converts a `u64` pivot value to a `usize` length.
///
/// ## Errors
/// Returns `ConversionError::Overflow` if the value does not fit into a
/// `usize` on the current target.
///
/// ## Example
/// ```
/// use radixa::util::num::u64_to_usize_checked;
///
/// assert_eq!(u64_to_usize_checked(7).unwrap(), 7);
/// ```
pub fn u64_to_usize_checked(value: u64) -> ConvertResult<usize> {
    usize::try_from(value).map_err(|_| ConversionError::Overflow)
}

/// Safely narrows a `u64` to a `u32` digit value.
///
/// ## Errors
/// Returns `ConversionError::Overflow` if the value exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use radixa::{error::ConversionError, util::num::u64_to_u32_checked};
///
/// assert_eq!(u64_to_u32_checked(35).unwrap(), 35);
/// assert_eq!(u64_to_u32_checked(u64::MAX).unwrap_err(), ConversionError::Overflow);
/// ```
pub fn u64_to_u32_checked(value: u64) -> ConvertResult<u32> {
    u32::try_from(value).map_err(|_| ConversionError::Overflow)
}

/// Truncates a scaled fraction towards zero and returns it as a digit of
/// `radix`.
///
/// The result saturates at `radix - 1`, and negative or NaN inputs yield `0`.
/// A fraction that rounded up to `1.0` therefore still produces a valid digit.
///
/// ## Example
/// ```
/// use radixa::util::num::truncate_to_digit;
///
/// assert_eq!(truncate_to_digit(1.999, 2), 1);
/// assert_eq!(truncate_to_digit(16.0, 16), 15);
/// assert_eq!(truncate_to_digit(f64::NAN, 10), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn truncate_to_digit(value: f64, radix: u32) -> u32 {
    // `as` saturates: NaN and negatives become 0.
    (value.trunc() as u32).min(radix.saturating_sub(1))
}
