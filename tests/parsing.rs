use closedform::{
    error::{IntegerWidth, ParseError},
    input::{
        equation::{extract_linear, extract_quadratic},
        number::{Trailing, parse_integer, parse_long, parse_real},
        tokenizer::tokenize,
    },
};

#[test]
fn empty_token_is_empty_input() {
    assert_eq!(parse_integer("", Trailing::Reject), Err(ParseError::EmptyInput));
    assert_eq!(parse_integer("", Trailing::Allow), Err(ParseError::EmptyInput));
    assert_eq!(parse_real("", Trailing::Reject), Err(ParseError::EmptyInput));
}

#[test]
fn non_numeric_token_is_unparsable() {
    for token in ["abc", "x5", "-", "+", ".", " ", "e5", "- 5"] {
        assert!(matches!(parse_integer(token, Trailing::Allow), Err(ParseError::Unparsable { .. })),
                "integer {token:?}");
        assert!(matches!(parse_real(token, Trailing::Allow), Err(ParseError::Unparsable { .. })),
                "real {token:?}");
    }
}

#[test]
fn trailing_characters_depend_on_policy() {
    let err = parse_integer("12a", Trailing::Reject).unwrap_err();
    assert_eq!(err,
               ParseError::TrailingGarbage { token: "12a".to_string(),
                                             rest:  "a".to_string(), });
    assert_eq!(parse_integer("12a", Trailing::Allow).unwrap(), 12);

    assert!(matches!(parse_integer("12 ", Trailing::Reject),
                     Err(ParseError::TrailingGarbage { .. })));
    assert!(matches!(parse_integer("1.5", Trailing::Reject),
                     Err(ParseError::TrailingGarbage { .. })));
    assert!(matches!(parse_real("2.5x", Trailing::Reject),
                     Err(ParseError::TrailingGarbage { .. })));
    assert_eq!(parse_real("2.5x", Trailing::Allow).unwrap(), 2.5);
}

#[test]
fn leading_whitespace_and_signs_are_accepted() {
    assert_eq!(parse_integer("  42", Trailing::Reject).unwrap(), 42);
    assert_eq!(parse_integer("+7", Trailing::Reject).unwrap(), 7);
    assert_eq!(parse_integer("-7", Trailing::Reject).unwrap(), -7);
    assert_eq!(parse_real("\t-3.25", Trailing::Reject).unwrap(), -3.25);
}

#[test]
fn integer_overflow_is_reported_per_width() {
    let err = parse_integer("99999999999999999999", Trailing::Reject).unwrap_err();
    assert!(matches!(err, ParseError::IntegerOverflow { width: IntegerWidth::Long, .. }));

    let err = parse_long("-99999999999999999999", Trailing::Reject).unwrap_err();
    assert!(matches!(err, ParseError::IntegerOverflow { width: IntegerWidth::Long, .. }));

    let err = parse_integer("2147483648", Trailing::Reject).unwrap_err();
    assert!(matches!(err, ParseError::IntegerOverflow { width: IntegerWidth::Int, .. }));

    assert_eq!(parse_integer("2147483647", Trailing::Reject).unwrap(), i32::MAX);
    assert_eq!(parse_integer("-2147483648", Trailing::Reject).unwrap(), i32::MIN);
    assert_eq!(parse_long("2147483648", Trailing::Reject).unwrap(), 2_147_483_648);
}

#[test]
fn trailing_garbage_is_checked_before_range() {
    let err = parse_integer("99999999999999999999x", Trailing::Reject).unwrap_err();
    assert!(matches!(err, ParseError::TrailingGarbage { .. }));

    let err = parse_integer("99999999999999999999x", Trailing::Allow).unwrap_err();
    assert!(matches!(err, ParseError::IntegerOverflow { .. }));
}

#[test]
fn real_notation_variants() {
    assert_eq!(parse_real("1", Trailing::Reject).unwrap(), 1.0);
    assert_eq!(parse_real("1.", Trailing::Reject).unwrap(), 1.0);
    assert_eq!(parse_real(".5", Trailing::Reject).unwrap(), 0.5);
    assert_eq!(parse_real("1e3", Trailing::Reject).unwrap(), 1000.0);
    assert_eq!(parse_real("2.5E-1", Trailing::Reject).unwrap(), 0.25);
    assert_eq!(parse_real("1.5e", Trailing::Allow).unwrap(), 1.5);
    assert!(matches!(parse_real("1.5e", Trailing::Reject),
                     Err(ParseError::TrailingGarbage { .. })));
}

#[test]
fn real_range_errors() {
    assert!(matches!(parse_real("1e400", Trailing::Reject),
                     Err(ParseError::NumericOverflow { .. })));
    assert!(matches!(parse_real("-1e400", Trailing::Reject),
                     Err(ParseError::NumericOverflow { .. })));

    // Very large but representable values are fine.
    assert_eq!(parse_real("1e308", Trailing::Reject).unwrap(), 1e308);
}

#[test]
fn real_underflow_is_out_of_range() {
    assert!(matches!(parse_real("1e-400", Trailing::Reject),
                     Err(ParseError::NumericOverflow { .. })));
    assert!(matches!(parse_real("-2.5e-400", Trailing::Reject),
                     Err(ParseError::NumericOverflow { .. })));
    // Subnormal results are rejected as well.
    assert!(matches!(parse_real("1e-310", Trailing::Reject),
                     Err(ParseError::NumericOverflow { .. })));
    assert!(matches!(parse_real("1e-400x", Trailing::Allow),
                     Err(ParseError::NumericOverflow { .. })));

    // Small normal values and literal zeros are fine.
    assert_eq!(parse_real("1e-300", Trailing::Reject).unwrap(), 1e-300);
    assert_eq!(parse_real("0e-400", Trailing::Reject).unwrap(), 0.0);
    assert_eq!(parse_real("-0.000", Trailing::Reject).unwrap(), 0.0);
}

#[test]
fn non_finite_words_are_accepted() {
    assert_eq!(parse_real("inf", Trailing::Reject).unwrap(), f64::INFINITY);
    assert_eq!(parse_real("-Infinity", Trailing::Reject).unwrap(), f64::NEG_INFINITY);
    assert!(parse_real("NaN", Trailing::Reject).unwrap().is_nan());
    assert!(matches!(parse_real("infin", Trailing::Reject),
                     Err(ParseError::TrailingGarbage { .. })));
}

#[test]
fn tokenizer_splits_on_spaces_only() {
    assert_eq!(tokenize("5x + 6y = 10"), ["5x", "+", "6y", "=", "10"]);
    assert_eq!(tokenize("  5x   +  6y "), ["5x", "+", "6y"]);
    assert!(tokenize("").is_empty());
    assert!(tokenize("    ").is_empty());
    assert_eq!(tokenize("a\tb c"), ["a\tb", "c"]);
}

#[test]
fn linear_extraction_signs_only_b() {
    assert_eq!(extract_linear("5x + 6y = 10").unwrap(), (5.0, 6.0, 10.0));
    assert_eq!(extract_linear("10x + 10y = -8").unwrap(), (10.0, 10.0, -8.0));
    assert_eq!(extract_linear("1x - 1y = 0").unwrap(), (1.0, -1.0, 0.0));
    assert_eq!(extract_linear("1x + 2y - 3").unwrap(), (1.0, 2.0, 3.0));
    assert_eq!(extract_linear("1.5x * 2y = 3").unwrap(), (1.5, 2.0, 3.0));
}

#[test]
fn quadratic_extraction_signs_b_and_c() {
    assert_eq!(extract_quadratic("2x^2 + 5x - 10").unwrap(), (2, 5, -10));
    assert_eq!(extract_quadratic("-1x^2 - 4x + 4").unwrap(), (-1, -4, 4));
    assert_eq!(extract_quadratic("1x^2 ~ 4x = 4").unwrap(), (1, 4, 4));
}

#[test]
fn short_equations_are_invalid_format() {
    let err = extract_linear("5x + 6y").unwrap_err();
    assert_eq!(err,
               ParseError::InvalidFormat { line:  "5x + 6y".to_string(),
                                           found: 3, });
    assert!(matches!(extract_quadratic(""), Err(ParseError::InvalidFormat { found: 0, .. })));
}

#[test]
fn bad_coefficients_name_their_position() {
    let err = extract_linear("5x + y = 10").unwrap_err();
    let ParseError::InvalidCoefficient { position, source } = err else {
        panic!("expected InvalidCoefficient, got {err:?}");
    };
    assert_eq!(position, 2);
    assert!(matches!(*source, ParseError::Unparsable { ref token } if token == "y"));

    let err = extract_quadratic("1x^2 + 3x - 2147483648").unwrap_err();
    assert!(matches!(err, ParseError::InvalidCoefficient { position: 4, .. }));
}
