/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the integer
/// widths used by the converter (`u32` digits and radixes, `u64` pivot values,
/// `usize` lengths) and for turning a scaled fraction into a digit.
///
/// Integer conversions return a `Result`, which is `Ok` if the conversion is
/// lossless and `Err(ConversionError::Overflow)` otherwise.
pub mod num;
