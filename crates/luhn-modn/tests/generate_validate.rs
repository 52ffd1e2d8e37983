use luhn_core::GenerateOptions;
use luhn_modn::{generate_mod_n, validate_mod_n};
use proptest::prelude::*;

#[test]
fn hexadecimal_check_characters() {
    assert_eq!(generate_mod_n("1", 16, None).unwrap(), "1E");
    assert_eq!(generate_mod_n("16", 16, None).unwrap(), "163");
    let opts = GenerateOptions::check_sum_only();
    assert_eq!(generate_mod_n("1", 16, Some(&opts)).unwrap(), "E");
}

#[test]
fn generate_runs_full_decimal_checks() {
    let cases = [
        ("", "string cannot be empty"),
        ("1 2", "string cannot contain spaces"),
        ("-1", "negative numbers are not allowed"),
        ("1.2", "floating point numbers are not allowed"),
        ("1A", "string must be convertible to a number"),
    ];
    for (value, message) in cases {
        assert_eq!(
            generate_mod_n(value, 16, None).unwrap_err().to_string(),
            message,
            "{value:?}"
        );
    }
    assert_eq!(
        generate_mod_n("12", 37, None).unwrap_err().to_string(),
        "n must be between 1 and 36"
    );
    // Value checks outrank the modulus check.
    assert_eq!(
        generate_mod_n("1a", 0, None).unwrap_err().to_string(),
        "string must be convertible to a number"
    );
}

#[test]
fn validate_accepts_and_rejects() {
    assert!(validate_mod_n("1E", 16).unwrap());
    assert!(validate_mod_n("163", 16).unwrap());
    assert!(!validate_mod_n("1F", 16).unwrap());
    assert!(!validate_mod_n("164", 16).unwrap());
    // Output is canonical uppercase and compared exactly.
    assert!(!validate_mod_n("1e", 16).unwrap());
}

#[test]
fn validate_checks_structure_then_modulus() {
    assert_eq!(
        validate_mod_n("", 0).unwrap_err().to_string(),
        "string cannot be empty"
    );
    assert_eq!(
        validate_mod_n("7", 0).unwrap_err().to_string(),
        "string must be longer than 1 character"
    );
    assert_eq!(
        validate_mod_n("12", 40).unwrap_err().to_string(),
        "n must be between 1 and 36"
    );
    // The prefix goes through generate's decimal checks.
    assert_eq!(
        validate_mod_n("AB", 16).unwrap_err().to_string(),
        "string must be convertible to a number"
    );
}

#[test]
fn base_one_appends_zero() {
    assert_eq!(generate_mod_n("987", 1, None).unwrap(), "9870");
    assert!(validate_mod_n("9870", 1).unwrap());
    assert!(!validate_mod_n("9871", 1).unwrap());
}

proptest! {
    #[test]
    fn generated_values_validate(value in "[0-9]{1,40}", n in 1i64..=36) {
        let full = generate_mod_n(&value, n, None).unwrap();
        prop_assert_eq!(full.len(), value.len() + 1);
        prop_assert!(full.starts_with(&value));
        prop_assert!(validate_mod_n(&full, n).unwrap());
    }
}
