use crate::UserProfile;

use serde::{Deserialize, Serialize};

/// Session state restored at startup and mirrored to the session store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub logged_in: bool,
    pub cached_profile: Option<UserProfile>,
}

impl SessionState {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(profile: UserProfile) -> Self {
        Self {
            logged_in: true,
            cached_profile: Some(profile),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}
