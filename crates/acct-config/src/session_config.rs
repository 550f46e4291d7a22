use crate::DEFAULT_SESSION_FILENAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session key-value file, relative to the config directory
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}
