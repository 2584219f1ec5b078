//! # radixa
//!
//! radixa converts numerals between positional radixes, written in Rust.
//! It supports radixes 1 (tally) through 36, fractional numerals with a fixed
//! precision of five digits, and custom symbol alphabets.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{converter::core::Converter, input::request::ConversionRequest};

/// Converts numerals between radixes.
///
/// This module declares the `Converter`, which owns a symbol alphabet and an
/// allowed radix range, together with the integer, fraction and tally
/// conversions it dispatches to.
///
/// # Responsibilities
/// - Maps symbols to digit values and back.
/// - Converts integer parts through a `u64` pivot and fractional parts through
///   an `f64` pivot.
/// - Handles the degenerate radix 1 as a tally.
pub mod converter;
/// Provides unified error types for input validation and conversion.
///
/// This module defines all errors that can be raised while reading input or
/// converting a numeral. Each error carries the offending values so a failure
/// can be reported precisely, even though the command line collapses every
/// failure into `error`.
pub mod error;
/// Validates the three input lines of a conversion.
///
/// This module checks the source radix, numeral and target radix lines against
/// their grammars before anything is converted.
pub mod input;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `u32`, `u64` and `usize` without silent data loss.
/// - Turn a scaled fraction into a digit.
pub mod util;

/// Returns the converted numeral for a block of input text.
///
/// The first three lines of `source` are the source radix, the numeral and the
/// target radix. They are validated and converted with the default converter,
/// which accepts radixes 1 to 36 over the symbols `0`-`9` and `a`-`z`.
///
/// # Errors
/// Returns an error if the input is malformed or the conversion fails.
///
/// # Examples
/// ```
/// use radixa::get_result;
///
/// assert_eq!(get_result("10\n10.5\n2\n").unwrap(), "1010.10000");
///
/// // The radix is out of range.
/// assert!(get_result("37\n1\n2\n").is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let request = ConversionRequest::parse(source)?;
    let converter = Converter::default();

    Ok(request.execute(&converter)?)
}
