//! Unit tests for the screen state types.

mod form_controller;

use crate::FormInput;

use acct_core::UserProfile;

pub(crate) fn alice_input() -> FormInput {
    FormInput {
        username: "alice".to_string(),
        password: "pw12345".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        email: "alice@example.com".to_string(),
        contact_number: "0123456789".to_string(),
        address: "1 Rabbit Hole".to_string(),
        profile_picture: String::new(),
    }
}

pub(crate) fn alice_profile() -> UserProfile {
    alice_input().to_profile()
}
