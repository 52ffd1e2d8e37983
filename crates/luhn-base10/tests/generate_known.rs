use luhn_base10::{compute_check_digit, generate};
use luhn_core::GenerateOptions;

const CASES: &[(&str, &str)] = &[
    ("1", "18"),
    ("12", "125"),
    ("123", "1230"),
    ("1234", "12344"),
    ("12345", "123455"),
    ("123456", "1234566"),
    ("1234567", "12345674"),
    ("12345678", "123456782"),
    ("123456789", "1234567897"),
    ("7992739871", "79927398713"),
];

#[test]
fn appends_check_digit() {
    for (value, expected) in CASES {
        assert_eq!(generate(value, None).unwrap(), *expected);
        let opts = GenerateOptions::default();
        assert_eq!(generate(value, Some(&opts)).unwrap(), *expected);
    }
}

#[test]
fn check_sum_only_returns_single_digit() {
    let opts = GenerateOptions::check_sum_only();
    for (value, expected) in CASES {
        let check = generate(value, Some(&opts)).unwrap();
        assert_eq!(check.len(), 1);
        assert_eq!(check, expected[expected.len() - 1..]);
        assert_eq!(
            compute_check_digit(value).unwrap().to_string(),
            check
        );
    }
}

#[test]
fn preserves_leading_zeros() {
    assert_eq!(generate("00123", None).unwrap(), "001230");
    assert_eq!(generate("0", None).unwrap(), "00");
}

#[test]
fn rejects_malformed_input_in_order() {
    let cases = [
        ("", "string cannot be empty"),
        ("1 2", "string cannot contain spaces"),
        (" -1", "string cannot contain spaces"),
        ("-12", "negative numbers are not allowed"),
        ("1-2.3", "negative numbers are not allowed"),
        ("1.5", "floating point numbers are not allowed"),
        ("1a", "string must be convertible to a number"),
        ("+12", "string must be convertible to a number"),
        ("1e5", "string must be convertible to a number"),
        ("١٢", "string must be convertible to a number"),
    ];
    for (value, message) in cases {
        let err = generate(value, None).unwrap_err();
        assert_eq!(err.to_string(), message, "{value:?}");
    }
}
