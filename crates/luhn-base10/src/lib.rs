#![deny(missing_docs)]
#![doc = "Classic base-10 Luhn check digits: generation, validation and random numbers."]

/// Check digit arithmetic.
pub mod check_digit;
/// Random numbers carrying a valid check digit.
pub mod random;

use luhn_core::validation::{BASE10, BASE10_CHECKED};
use luhn_core::{GenerateOptions, LuhnError};

use check_digit::check_digit_unchecked;

pub use check_digit::compute_check_digit;
pub use random::{random, random_with, MAX_RANDOM_LENGTH, MIN_RANDOM_LENGTH};

/// Appends the Luhn check digit to `value`, or returns it alone when
/// `check_sum_only` is set.
///
/// Leading zeros are kept verbatim: `"00123"` yields `"001230"`.
pub fn generate(value: &str, options: Option<&GenerateOptions>) -> Result<String, LuhnError> {
    BASE10.run(value)?;
    let check = char::from(b'0' + check_digit_unchecked(value));
    if GenerateOptions::resolve(options) {
        return Ok(check.to_string());
    }
    let mut out = String::with_capacity(value.len() + 1);
    out.push_str(value);
    out.push(check);
    Ok(out)
}

/// Returns whether the last digit of `value` is the Luhn check digit of the
/// digits before it.
///
/// Malformed input is an error; a wrong check digit is `Ok(false)`.
pub fn validate(value: &str) -> Result<bool, LuhnError> {
    BASE10_CHECKED.run(value)?;
    let prefix = &value[..value.len() - 1];
    Ok(generate(prefix, None)? == value)
}
