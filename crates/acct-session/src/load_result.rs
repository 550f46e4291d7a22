use acct_core::SessionState;

/// Result of restoring the session at startup - distinguishes "logged out"
/// from "cache was unreadable and has been cleared".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub state: SessionState,
    /// Present if the cached profile existed but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn restored(state: SessionState) -> Self {
        Self {
            state,
            corruption_error: None,
        }
    }
}
