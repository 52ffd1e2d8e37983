use serde::{Deserialize, Serialize};

/// Options accepted by the generate entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Return only the check character instead of the value with it appended.
    #[serde(rename = "checkSumOnly")]
    pub check_sum_only: bool,
}

impl GenerateOptions {
    /// Options requesting the check character alone.
    pub const fn check_sum_only() -> Self {
        Self {
            check_sum_only: true,
        }
    }

    /// Sets the `check_sum_only` flag.
    pub fn with_check_sum_only(mut self, check_sum_only: bool) -> Self {
        self.check_sum_only = check_sum_only;
        self
    }

    /// Resolves an optional options reference to the effective flag.
    pub fn resolve(options: Option<&GenerateOptions>) -> bool {
        options.is_some_and(|opts| opts.check_sum_only)
    }
}
