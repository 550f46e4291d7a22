use crate::{DEFAULT_PROFILE_VALIDATE_EDITS, DEFAULT_PROFILE_WRITE_BACK};

use serde::Deserialize;

/// Profile editor behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Also write saved edits to the record store, not just the session cache
    pub write_back: bool,
    /// Apply registration rules to edited fields before saving
    pub validate_edits: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            write_back: DEFAULT_PROFILE_WRITE_BACK,
            validate_edits: DEFAULT_PROFILE_VALIDATE_EDITS,
        }
    }
}
