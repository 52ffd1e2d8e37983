use std::collections::HashSet;

use luhn_base10::{random, random_with, validate};
use luhn_core::RngHandle;
use proptest::prelude::*;

#[test]
fn rejects_bad_lengths() {
    let cases = [
        (String::new(), "string cannot be empty"),
        ("1a".to_string(), "string must be convertible to a number"),
        ("2.5".to_string(), "floating point numbers are not allowed"),
        ("-5".to_string(), "negative numbers are not allowed"),
        ("1".to_string(), "length must be greater than or equal to 2"),
        ("101".to_string(), "length must be less than or equal to 100"),
        ("1".repeat(99), "length must be less than or equal to 100"),
    ];
    for (length, message) in cases {
        let err = random(&length).unwrap_err();
        assert_eq!(err.to_string(), message, "{length:?}");
    }
}

#[test]
fn produces_requested_lengths() {
    for length in ["2", "25", "50", "100"] {
        let value = random(length).unwrap();
        assert_eq!(value.len(), length.parse::<usize>().unwrap());
        assert!(validate(&value).unwrap());
    }
}

#[test]
fn seeded_generator_is_reproducible() {
    let mut rng_a = RngHandle::from_seed(7);
    let mut rng_b = RngHandle::from_seed(7);
    for _ in 0..16 {
        assert_eq!(
            random_with("16", &mut rng_a).unwrap(),
            random_with("16", &mut rng_b).unwrap()
        );
    }
}

#[test]
fn no_collisions_over_large_sample() {
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(random("16").unwrap()));
    }
}

#[test]
fn digit_distribution_is_near_uniform() {
    let mut rng = RngHandle::from_seed(0xC0FFEE);
    let mut counts = [0usize; 10];
    let mut total = 0usize;
    for _ in 0..2_000 {
        let value = random_with("51", &mut rng).unwrap();
        // Skip the leading digit (1-9) and the derived check digit.
        for byte in value.bytes().skip(1).take(49) {
            counts[usize::from(byte - b'0')] += 1;
            total += 1;
        }
    }
    let expected = total / 10;
    for count in counts {
        assert!(count.abs_diff(expected) < expected / 20, "{counts:?}");
    }
}

proptest! {
    #[test]
    fn random_numbers_validate(seed in any::<u64>(), length in 2usize..=100) {
        let mut rng = RngHandle::from_seed(seed);
        let value = random_with(&length.to_string(), &mut rng).unwrap();
        prop_assert_eq!(value.len(), length);
        prop_assert!(value.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_ne!(value.as_bytes()[0], b'0');
        prop_assert!(validate(&value).unwrap());
    }
}
