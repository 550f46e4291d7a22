//! User account entity held in the local record store.

use crate::UserProfile;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account: credentials plus profile.
///
/// The username inside `profile` is the unique key. The password is stored
/// as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub profile: UserProfile,
    #[serde(skip)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record with a fresh id and timestamps
    pub fn new(profile: UserProfile, password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile,
            password: password.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn username(&self) -> &str {
        &self.profile.username
    }

    /// Exact, case-sensitive credential match
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.profile.username == username && self.password == password
    }
}
