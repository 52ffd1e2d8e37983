//! Every operation here first requires `value` to be a JSON string, failing
//! with `value must be a string - received <repr>` otherwise, then defers to
//! the typed operation of the same name.

use luhn_core::dynamic::expect_string;
use luhn_core::{GenerateOptions, LuhnError};
use serde_json::Value;

/// Dynamic form of [`crate::generate`].
pub fn generate(
    value: Option<&Value>,
    options: Option<&GenerateOptions>,
) -> Result<String, LuhnError> {
    luhn_base10::generate(expect_string(value)?, options)
}

/// Dynamic form of [`crate::validate`].
pub fn validate(value: Option<&Value>) -> Result<bool, LuhnError> {
    luhn_base10::validate(expect_string(value)?)
}

/// Dynamic form of [`crate::random`].
pub fn random(length: Option<&Value>) -> Result<String, LuhnError> {
    luhn_base10::random(expect_string(length)?)
}

/// Dynamic form of [`crate::generate_mod_n`].
pub fn generate_mod_n(
    value: Option<&Value>,
    n: i64,
    options: Option<&GenerateOptions>,
) -> Result<String, LuhnError> {
    luhn_modn::generate_mod_n(expect_string(value)?, n, options)
}

/// Dynamic form of [`crate::validate_mod_n`].
pub fn validate_mod_n(value: Option<&Value>, n: i64) -> Result<bool, LuhnError> {
    luhn_modn::validate_mod_n(expect_string(value)?, n)
}

/// Dynamic form of [`crate::checksum_mod_n`].
pub fn checksum_mod_n(value: Option<&Value>, n: i64) -> Result<u32, LuhnError> {
    luhn_modn::checksum_mod_n(expect_string(value)?, n)
}
