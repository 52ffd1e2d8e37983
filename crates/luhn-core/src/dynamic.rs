//! Coercion of loosely typed values into strings.

use serde_json::Value;

use crate::errors::LuhnError;

/// Borrows the string inside `value`, failing for anything else.
///
/// A missing value renders as `undefined` and JSON `null` as `null`; every
/// other non-string renders as its JSON text.
pub fn expect_string(value: Option<&Value>) -> Result<&str, LuhnError> {
    match value {
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(LuhnError::not_a_string(&other.to_string())),
        None => Err(LuhnError::not_a_string("undefined")),
    }
}
