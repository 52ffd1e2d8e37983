#![deny(missing_docs)]
#![doc = "Luhn mod N: the Luhn checksum generalised to any base from 1 to 36."]

/// Alphabet encoding and decoding.
pub mod codec;

use luhn_core::validation::{BASE10, STRUCTURE, STRUCTURE_CHECKED};
use luhn_core::{GenerateOptions, LuhnError, Modulus, ALPHABET};

pub use codec::{char_to_int, int_to_char};

/// Computes the mod-N check value of `value`.
///
/// Only structure and the modulus range are checked up front; characters
/// outside the alphabet fail while decoding with `Invalid character: <c>`.
/// Decoded indices are used as-is even when they are not below `n`.
pub fn checksum_mod_n(value: &str, n: i64) -> Result<u32, LuhnError> {
    STRUCTURE.run(value)?;
    let modulus = Modulus::new(n)?;
    check_value(value, modulus)
}

/// Appends the mod-N check character to `value`, or returns it alone when
/// `check_sum_only` is set. The check character is always uppercase.
pub fn generate_mod_n(
    value: &str,
    n: i64,
    options: Option<&GenerateOptions>,
) -> Result<String, LuhnError> {
    BASE10.run(value)?;
    let modulus = Modulus::new(n)?;
    let check = check_value(value, modulus)?;
    // check < n <= 36, always inside the alphabet
    let symbol = char::from(ALPHABET.as_bytes()[check as usize]);
    if GenerateOptions::resolve(options) {
        return Ok(symbol.to_string());
    }
    let mut out = String::with_capacity(value.len() + 1);
    out.push_str(value);
    out.push(symbol);
    Ok(out)
}

/// Returns whether the last character of `value` is the mod-N check
/// character of the characters before it.
///
/// The regenerated string is compared exactly, so a lowercase check
/// character never validates.
pub fn validate_mod_n(value: &str, n: i64) -> Result<bool, LuhnError> {
    STRUCTURE_CHECKED.run(value)?;
    Modulus::new(n)?;
    let split = value
        .char_indices()
        .last()
        .map_or(0, |(offset, _)| offset);
    Ok(generate_mod_n(&value[..split], n, None)? == value)
}

fn check_value(value: &str, modulus: Modulus) -> Result<u32, LuhnError> {
    let n = modulus.get();
    let len = value.chars().count();
    let mut sum: u64 = 0;
    let mut factor = 2;
    for (offset, character) in value.chars().rev().enumerate() {
        let addend = codec::decode_at(character, len - 1 - offset)? * factor;
        sum += u64::from(addend / n + addend % n);
        factor = if factor == 2 { 1 } else { 2 };
    }
    let n = u64::from(n);
    let check = ((n - sum % n) % n) as u32;
    tracing::trace!(check, modulus = %modulus, len, "mod-n check value");
    Ok(check)
}
