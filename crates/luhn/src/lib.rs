#![deny(missing_docs)]
//! Luhn check digits for decimal identifiers and Luhn mod N check
//! characters for base-36 identifiers.
//!
//! ```
//! assert_eq!(luhn::generate("7992739871", None).unwrap(), "79927398713");
//! assert!(luhn::validate("79927398713").unwrap());
//! assert_eq!(luhn::generate_mod_n("1", 16, None).unwrap(), "1E");
//! assert_eq!(luhn::checksum_mod_n("12345", 10).unwrap(), 5);
//! ```
//!
//! Malformed input is reported as a [`LuhnError`] whose `Display` output is
//! the exact contract message. A well-formed value with the wrong check
//! character is not an error: `validate` and `validate_mod_n` return
//! `Ok(false)`.

/// Entry points accepting loosely typed JSON values.
pub mod dynamic;

pub use luhn_base10::{
    compute_check_digit, generate, random, random_with, validate, MAX_RANDOM_LENGTH,
    MIN_RANDOM_LENGTH,
};
pub use luhn_core::{ErrorInfo, GenerateOptions, LuhnError, Modulus, RngHandle, ALPHABET};
pub use luhn_modn::{char_to_int, checksum_mod_n, generate_mod_n, int_to_char, validate_mod_n};
