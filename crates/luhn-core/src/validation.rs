//! Input checks run before any checksum arithmetic.
//!
//! Each check is an independent predicate. Engines compose the subset they
//! need into an ordered [`Pipeline`]; the first failing check wins.

use crate::errors::{codes, LuhnError};

/// A single input predicate.
pub type Check = fn(&str) -> Result<(), LuhnError>;

/// Named, ordered list of checks.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    name: &'static str,
    checks: &'static [Check],
}

impl Pipeline {
    /// Builds a pipeline from a static list of checks.
    pub const fn new(name: &'static str, checks: &'static [Check]) -> Self {
        Self { name, checks }
    }

    /// Name used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs every check in order, stopping at the first failure.
    pub fn run(&self, value: &str) -> Result<(), LuhnError> {
        for check in self.checks {
            if let Err(err) = check(value) {
                tracing::debug!(
                    pipeline = self.name,
                    code = err.code(),
                    len = value.chars().count(),
                    "input rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Full decimal input checks used by every generate entry point.
pub const BASE10: Pipeline = Pipeline::new(
    "base10",
    &[non_empty, no_spaces, no_hyphen, no_period, numeric],
);

/// Full decimal checks followed by the room-for-a-check-digit check.
pub const BASE10_CHECKED: Pipeline = Pipeline::new(
    "base10-checked",
    &[
        non_empty,
        no_spaces,
        no_hyphen,
        no_period,
        numeric,
        longer_than_one,
    ],
);

/// Structural checks only; character validity is left to decoding.
pub const STRUCTURE: Pipeline = Pipeline::new("structure", &[non_empty]);

/// Structural checks plus the room-for-a-check-character check.
pub const STRUCTURE_CHECKED: Pipeline =
    Pipeline::new("structure-checked", &[non_empty, longer_than_one]);

/// Fails on a zero-length string.
pub fn non_empty(value: &str) -> Result<(), LuhnError> {
    if value.is_empty() {
        return Err(LuhnError::value(codes::EMPTY, "string cannot be empty"));
    }
    Ok(())
}

/// Fails when the string contains an ASCII space.
pub fn no_spaces(value: &str) -> Result<(), LuhnError> {
    if value.contains(' ') {
        return Err(LuhnError::value(
            codes::CONTAINS_SPACE,
            "string cannot contain spaces",
        ));
    }
    Ok(())
}

/// Fails when the string contains a hyphen.
pub fn no_hyphen(value: &str) -> Result<(), LuhnError> {
    if value.contains('-') {
        return Err(LuhnError::value(
            codes::NEGATIVE,
            "negative numbers are not allowed",
        ));
    }
    Ok(())
}

/// Fails when the string contains a period.
pub fn no_period(value: &str) -> Result<(), LuhnError> {
    if value.contains('.') {
        return Err(LuhnError::value(
            codes::FLOATING_POINT,
            "floating point numbers are not allowed",
        ));
    }
    Ok(())
}

/// Fails unless every character is an ASCII decimal digit.
pub fn numeric(value: &str) -> Result<(), LuhnError> {
    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(LuhnError::value(
            codes::NOT_NUMERIC,
            "string must be convertible to a number",
        ));
    }
    Ok(())
}

/// Fails when the string is a single character.
pub fn longer_than_one(value: &str) -> Result<(), LuhnError> {
    if value.chars().count() == 1 {
        return Err(LuhnError::value(
            codes::TOO_SHORT,
            "string must be longer than 1 character",
        ));
    }
    Ok(())
}
