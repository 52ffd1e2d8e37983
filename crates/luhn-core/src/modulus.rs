//! Range-checked modulus for the mod-N engine.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::alphabet::ALPHABET_LEN;
use crate::errors::LuhnError;

/// A base between 1 and 36 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Modulus(u32);

impl Modulus {
    /// Smallest accepted base.
    pub const MIN: u32 = 1;
    /// Largest accepted base, the size of the alphabet.
    pub const MAX: u32 = ALPHABET_LEN;
    /// The decimal base used by the classic Luhn algorithm.
    pub const DECIMAL: Modulus = Modulus(10);

    /// Validates `n` and wraps it.
    pub fn new(n: i64) -> Result<Self, LuhnError> {
        if n < i64::from(Self::MIN) || n > i64::from(Self::MAX) {
            tracing::debug!(n, "modulus rejected");
            return Err(LuhnError::modulus_range(n));
        }
        Ok(Self(n as u32))
    }

    /// Returns the raw base.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Modulus {
    type Error = LuhnError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for u32 {
    fn from(value: Modulus) -> Self {
        value.0
    }
}

impl Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
