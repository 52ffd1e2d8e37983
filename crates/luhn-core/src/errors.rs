//! Structured error types shared across the Luhn crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`LuhnError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message. Consumers match on this verbatim.
    pub message: String,
    /// Contextual key value pairs (offending character, modulus, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Canonical error type for the Luhn engines.
///
/// The `Display` output of every variant is exactly the payload message, so
/// `err.to_string()` can be compared against the documented message strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LuhnError {
    /// The supplied value was not a string at all.
    #[error("{0}")]
    Type(ErrorInfo),
    /// The supplied value or parameter violated a precondition.
    #[error("{0}")]
    Value(ErrorInfo),
    /// A character outside the base-36 alphabet was encountered.
    #[error("{0}")]
    Character(ErrorInfo),
}

impl LuhnError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LuhnError::Type(info) | LuhnError::Value(info) | LuhnError::Character(info) => info,
        }
    }

    /// Returns the stable machine readable code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Returns the human readable message.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Builds the error raised when a value is not a string.
    pub fn not_a_string(repr: &str) -> Self {
        LuhnError::Type(
            ErrorInfo::new(
                codes::NOT_A_STRING,
                format!("value must be a string - received {repr}"),
            )
            .with_context("received", repr),
        )
    }

    /// Builds a precondition failure with a fixed message.
    pub fn value(code: &str, message: &str) -> Self {
        LuhnError::Value(ErrorInfo::new(code, message))
    }

    /// Builds the error raised when the modulus is outside `1..=36`.
    pub fn modulus_range(n: i64) -> Self {
        LuhnError::Value(
            ErrorInfo::new(codes::MODULUS_RANGE, "n must be between 1 and 36")
                .with_context("n", n.to_string()),
        )
    }

    /// Builds the error raised for a character outside the alphabet.
    pub fn invalid_character(character: char, position: usize) -> Self {
        LuhnError::Character(
            ErrorInfo::new(
                codes::INVALID_CHARACTER,
                format!("Invalid character: {character}"),
            )
            .with_context("character", character.to_string())
            .with_context("position", position.to_string())
            .with_hint("only 0-9 and A-Z (either case) are accepted"),
        )
    }
}

/// Stable error codes carried in [`ErrorInfo::code`].
pub mod codes {
    /// The value was not a string.
    pub const NOT_A_STRING: &str = "not-a-string";
    /// The string was empty.
    pub const EMPTY: &str = "empty";
    /// The string contained a space.
    pub const CONTAINS_SPACE: &str = "contains-space";
    /// The string contained a hyphen.
    pub const NEGATIVE: &str = "negative";
    /// The string contained a period.
    pub const FLOATING_POINT: &str = "floating-point";
    /// The string was not made of decimal digits.
    pub const NOT_NUMERIC: &str = "not-numeric";
    /// The string had no room for a check character.
    pub const TOO_SHORT: &str = "too-short";
    /// The modulus was outside `1..=36`.
    pub const MODULUS_RANGE: &str = "modulus-range";
    /// The requested random length was below the minimum.
    pub const LENGTH_TOO_SMALL: &str = "length-too-small";
    /// The requested random length was above the maximum.
    pub const LENGTH_TOO_LARGE: &str = "length-too-large";
    /// A character outside the alphabet was decoded.
    pub const INVALID_CHARACTER: &str = "invalid-character";
}
