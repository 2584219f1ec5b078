/// The alphabet module maps symbols to digit values and back.
///
/// An alphabet is an ordered set of unique symbols; the position of a symbol
/// is its digit value. The default alphabet covers radixes up to 36.
pub mod alphabet;
/// The core module holds the `Converter` and its top-level `convert`
/// operation.
///
/// The converter owns an alphabet and an allowed radix range. It validates
/// both radixes of a request and routes the numeral to the tally path or the
/// positional integer and fraction paths.
///
/// # Responsibilities
/// - Validates the configuration once, at construction.
/// - Rejects radixes outside of the configured range.
/// - Joins converted integer and fractional parts with a `.`.
pub mod core;
/// Positional conversion of the fractional part, with a fixed output
/// precision of five digits.
pub mod fraction;
/// Positional conversion of the integer part through a `u64` pivot.
pub mod integer;
/// Splitting of a numeral into its integer and fractional parts.
pub mod numeral;
/// Conversion to and from radix 1, where a numeral is a tally of symbols.
pub mod unary;
