use crate::error::{Error, Result};
use serde::Deserialize;

pub const DEFAULT_CANCEL_SENTINEL: &str = "q";

/// Settings that shape a rename session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenameSettings {
    /// Answer that cancels the session at the folder/base/extension prompts,
    /// compared case-insensitively
    pub cancel_sentinel: String,
    /// Counter value given to the first matching entry
    pub start_index: u64,
    /// Process entries sorted by name instead of listing order
    pub sort_entries: bool,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            cancel_sentinel: DEFAULT_CANCEL_SENTINEL.to_string(),
            start_index: 0,
            sort_entries: false,
        }
    }
}

impl RenameSettings {
    pub fn validate(&self) -> Result<()> {
        if self.cancel_sentinel.trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: "cancel_sentinel must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_cancel(&self, answer: &str) -> bool {
        answer.to_lowercase() == self.cancel_sentinel.to_lowercase()
    }
}
