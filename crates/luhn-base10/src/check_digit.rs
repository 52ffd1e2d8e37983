use luhn_core::validation::BASE10;
use luhn_core::LuhnError;

/// Computes the Luhn check digit for a decimal string.
///
/// The input goes through the full decimal checks first, so the result is
/// always in `0..=9`.
pub fn compute_check_digit(value: &str) -> Result<u8, LuhnError> {
    BASE10.run(value)?;
    Ok(check_digit_unchecked(value))
}

/// Check digit for a string already known to be ASCII digits.
pub(crate) fn check_digit_unchecked(digits: &str) -> u8 {
    let mut sum: u64 = 0;
    let mut double = true;
    for byte in digits.bytes().rev() {
        let digit = u64::from(byte - b'0');
        sum += if double {
            let doubled = digit * 2;
            if doubled >= 10 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
        double = !double;
    }
    let check = ((10 - sum % 10) % 10) as u8;
    tracing::trace!(check, len = digits.len(), "base-10 check digit");
    check
}
