//! Unit tests for the session stores.

mod file_store;

use acct_core::UserProfile;

pub(crate) fn test_profile(username: &str) -> UserProfile {
    UserProfile {
        username: username.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        email: "alice@example.com".to_string(),
        contact_number: "0123456789".to_string(),
        address: "1 Rabbit Hole".to_string(),
        profile_picture: None,
    }
}
