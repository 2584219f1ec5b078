use radixa::{
    converter::{
        alphabet::Alphabet,
        core::Converter,
        fraction::FRACTION_DIGITS,
        unary::MAX_TALLY_LEN,
    },
    error::ConversionError,
    get_result,
};

fn assert_converts(source: &str, source_radix: u32, target_radix: u32, expected: &str) {
    match Converter::default().convert(source, source_radix, target_radix) {
        Ok(actual) => assert_eq!(actual, expected, "{source} ({source_radix} -> {target_radix})"),
        Err(e) => panic!("Conversion of {source} failed: {e}"),
    }
}

fn assert_failure(source: &str, source_radix: u32, target_radix: u32) -> ConversionError {
    match Converter::default().convert(source, source_radix, target_radix) {
        Ok(actual) => panic!("Conversion of {source} succeeded with {actual} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn integer_conversions() {
    assert_converts("0", 10, 2, "0");
    assert_converts("ff", 16, 10, "255");
    assert_converts("255", 10, 16, "ff");
    assert_converts("100", 16, 10, "256");
    assert_converts("z", 36, 10, "35");
    assert_converts("35", 10, 36, "z");
    assert_converts("1111", 2, 8, "17");
    assert_converts("10", 10, 10, "10");
}

#[test]
fn fractional_conversions() {
    assert_converts("10.5", 10, 2, "1010.10000");
    assert_converts("0.1", 10, 2, "0.00011");
    assert_converts("0.8", 16, 10, "0.50000");
    assert_converts("1.1", 3, 10, "1.33333");
    assert_converts("10.", 10, 2, "1010.00000");
}

#[test]
fn fractional_part_always_has_five_digits() {
    let converter = Converter::default();

    for radix in 2..=36 {
        let converted = converter.convert("1.1", 10, radix).unwrap();
        let (_, fraction) = converted.split_once('.').unwrap();
        assert_eq!(fraction.len(), FRACTION_DIGITS, "radix {radix}");
    }
}

#[test]
fn tally_encoding() {
    assert_converts("7", 10, 1, "1111111");
    assert_converts("0.9", 10, 1, "");
    assert_converts("11", 16, 1, &"1".repeat(17));
}

#[test]
fn tally_decoding_ignores_symbol_identity() {
    assert_converts("11111", 1, 10, "5");
    assert_converts("zq0", 1, 10, "3");
    assert_converts("abcdefghijkl", 1, 16, "c");
    assert_converts("111.111", 1, 10, "3");
    assert_converts("111", 1, 1, "111");
}

#[test]
fn integer_round_trip() {
    let converter = Converter::default();
    let values = [0, 1, 2, 35, 36, 255, 256, 1295, 1296, 65_535, 1 << 40, u64::MAX];

    for radix in 2..=36 {
        for value in values {
            let digits = converter.from_decimal_integer(value, radix).unwrap();
            assert_eq!(converter.to_decimal_integer(&digits, radix).unwrap(),
                       value,
                       "{value} in radix {radix} encoded as {digits}");
        }
    }
}

#[test]
fn zero_encodes_as_single_zero_symbol() {
    let converter = Converter::default();
    let zero = converter.alphabet().zero().to_string();

    for radix in 2..=36 {
        assert_eq!(converter.from_decimal_integer(0, radix).unwrap(), zero);
    }

    let letters = Converter::new(2, 4, Alphabet::new("abcd").unwrap()).unwrap();
    assert_eq!(letters.alphabet().zero(), 'a');
    assert_eq!(letters.from_decimal_integer(0, 2).unwrap(), "a");
    assert_eq!(letters.from_decimal_integer(0, 4).unwrap(), "a");
}

#[test]
fn symbol_values_round_trip() {
    let alphabet = Alphabet::default();

    for symbol in "0123456789abcdefghijklmnopqrstuvwxyz".chars() {
        let value = alphabet.value_of(symbol).unwrap();
        assert_eq!(alphabet.symbol_of(value).unwrap(), symbol);
    }
}

#[test]
fn radix_limits() {
    assert_converts("1", 36, 36, "1");
    assert_eq!(assert_failure("5", 37, 10),
               ConversionError::RadixOutOfRange { radix: 37,
                                                  min:   1,
                                                  max:   36, });
    assert_eq!(assert_failure("5", 10, 37),
               ConversionError::RadixOutOfRange { radix: 37,
                                                  min:   1,
                                                  max:   36, });
    assert!(matches!(assert_failure("5", 0, 10), ConversionError::RadixOutOfRange { .. }));
}

#[test]
fn invalid_configuration_is_error() {
    for (min, max, symbols) in [(1, 37, "0123456789abcdefghijklmnopqrstuvwxyz"), (5, 4, "0123456789"), (0, 2, "01")] {
        let alphabet = Alphabet::new(symbols).unwrap();
        assert!(matches!(Converter::new(min, max, alphabet),
                         Err(ConversionError::InvalidConfiguration { .. })));
    }
    assert!(matches!(Alphabet::new("001"), Err(ConversionError::InvalidConfiguration { .. })));
}

#[test]
fn custom_alphabet() {
    let converter = Converter::new(2, 4, Alphabet::new("abcd").unwrap()).unwrap();

    assert_eq!(converter.convert("dd", 4, 2).unwrap(), "bbbb");
    assert_eq!(converter.convert("b.c", 4, 2).unwrap(), "b.baaaa");
    assert!(matches!(converter.convert("5", 4, 2), Err(ConversionError::UnknownSymbol { symbol: '5' })));
    assert!(matches!(converter.convert("d", 4, 5), Err(ConversionError::RadixOutOfRange { .. })));
}

#[test]
fn digit_outside_radix_is_error() {
    assert_eq!(assert_failure("f", 10, 2),
               ConversionError::DigitOutOfRange { symbol: 'f',
                                                  radix:  10, });
    assert_eq!(assert_failure("1.2", 2, 10),
               ConversionError::DigitOutOfRange { symbol: '2',
                                                  radix:  2, });
}

#[test]
fn overflow_is_error() {
    assert_eq!(assert_failure("zzzzzzzzzzzzz", 36, 10), ConversionError::Overflow);
    assert_converts("18446744073709551615", 10, 16, "ffffffffffffffff");
    assert_eq!(assert_failure("18446744073709551616", 10, 16), ConversionError::Overflow);
    assert_eq!(assert_failure("zzzzzzzzzzzz", 36, 1), ConversionError::Overflow);
}

#[test]
fn tally_length_is_bounded() {
    assert_eq!(MAX_TALLY_LEN, 1 << 24);

    let tally = Converter::default().convert("1000000", 16, 1).unwrap();
    assert_eq!(tally.len(), MAX_TALLY_LEN);
    assert!(tally.chars().all(|c| c == '1'));

    assert_eq!(assert_failure("1000001", 16, 1), ConversionError::Overflow);
    assert_eq!(get_result("36\nzzzzzzzzzzzz\n1\n").unwrap_or_else(|_| "error".to_string()),
               "error");
}

#[test]
fn malformed_numeral_is_error() {
    assert!(matches!(assert_failure(".5", 10, 2), ConversionError::MalformedNumeral { .. }));
    assert!(matches!(assert_failure("1.2.3", 10, 2), ConversionError::MalformedNumeral { .. }));
    assert!(matches!(assert_failure("", 10, 2), ConversionError::MalformedNumeral { .. }));
    assert_eq!(Converter::default().convert_by_one(".5", 2, 1).unwrap_err(),
               ConversionError::MalformedNumeral { numeral: ".5".to_string() });
    assert_eq!(Converter::default().convert_by_one("", 1, 10).unwrap(), "0");
}

#[test]
fn converter_is_shareable_across_threads() {
    let converter = Converter::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (2..=36).map(|radix| {
                                          let converter = &converter;
                                          scope.spawn(move || converter.convert("255", 10, radix))
                                      })
                                      .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    });
}

#[test]
fn get_result_reports_input_and_conversion_errors() {
    assert_eq!(get_result("16\nff\n10\n").unwrap(), "255");
    assert_eq!(get_result("16\r\nff\r\n10\r\nignored\n").unwrap(), "255");
    assert!(get_result("").is_err());
    assert!(get_result("10\n5\n").is_err());
    assert!(get_result("10\n0\n2\n").is_err());
    assert!(get_result("10\n00\n2\n").is_err());
    assert!(get_result("10\n0.\n2\n").is_err());
    assert!(get_result("10\n1 \n2\n").is_err());
    assert!(get_result("010\n1\n2\n").is_err());
}
