#![allow(dead_code)]

use acct_core::{UserProfile, UserRecord};

/// Creates a valid profile for the given username
pub fn create_test_profile(username: &str) -> UserProfile {
    UserProfile {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{}@example.com", username),
        contact_number: "0123456789".to_string(),
        address: "1 Test Street".to_string(),
        profile_picture: None,
    }
}

/// Creates a record with the given credentials
pub fn create_test_record(username: &str, password: &str) -> UserRecord {
    UserRecord::new(create_test_profile(username), password)
}
