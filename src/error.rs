/// Input errors.
///
/// Defines the errors raised while reading the three input lines: too few
/// lines, or a line that does not match the radix or numeral grammar. These are
/// detected before any conversion takes place.
pub mod input_error;
/// Conversion errors.
///
/// Contains all error types that can be raised by the converter itself, such
/// as an invalid alphabet, a radix outside the configured range, an unknown
/// symbol or an integer overflow.
pub mod conversion_error;

pub use conversion_error::ConversionError;
pub use input_error::InputError;
