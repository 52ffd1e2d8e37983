use std::num::IntErrorKind;

use luhn_core::errors::codes;
use luhn_core::rng::{digit, leading_digit};
use luhn_core::validation::BASE10;
use luhn_core::{ErrorInfo, LuhnError};
use rand::Rng;

use crate::check_digit::check_digit_unchecked;

/// Shortest number [`random`] will produce, check digit included.
pub const MIN_RANDOM_LENGTH: usize = 2;
/// Longest number [`random`] will produce, check digit included.
pub const MAX_RANDOM_LENGTH: usize = 100;

/// Produces a random number of `length` digits ending in a valid check digit.
///
/// `length` is a decimal string between 2 and 100. The first digit is never
/// `0`. Each call draws from the thread-local entropy-seeded generator.
pub fn random(length: &str) -> Result<String, LuhnError> {
    random_with(length, &mut rand::thread_rng())
}

/// Same as [`random`] but draws digits from the supplied generator.
pub fn random_with<R: Rng>(length: &str, rng: &mut R) -> Result<String, LuhnError> {
    let length = parse_length(length)?;
    tracing::debug!(length, "generating random luhn number");

    let mut digits = String::with_capacity(length);
    digits.push(leading_digit(rng));
    for _ in 1..length - 1 {
        digits.push(digit(rng));
    }
    let check = check_digit_unchecked(&digits);
    digits.push(char::from(b'0' + check));
    Ok(digits)
}

fn parse_length(length: &str) -> Result<usize, LuhnError> {
    BASE10.run(length)?;
    let parsed = match length.parse::<usize>() {
        Ok(parsed) => parsed,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => return Err(too_large(length)),
        Err(_) => {
            return Err(LuhnError::value(
                codes::NOT_NUMERIC,
                "string must be convertible to a number",
            ))
        }
    };
    if parsed < MIN_RANDOM_LENGTH {
        return Err(LuhnError::Value(
            ErrorInfo::new(
                codes::LENGTH_TOO_SMALL,
                "length must be greater than or equal to 2",
            )
            .with_context("length", length),
        ));
    }
    if parsed > MAX_RANDOM_LENGTH {
        return Err(too_large(length));
    }
    Ok(parsed)
}

fn too_large(length: &str) -> LuhnError {
    LuhnError::Value(
        ErrorInfo::new(
            codes::LENGTH_TOO_LARGE,
            "length must be less than or equal to 100",
        )
        .with_context("length", length),
    )
}
