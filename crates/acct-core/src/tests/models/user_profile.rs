use crate::{DEFAULT_AVATAR_URL, ProfileField, UserProfile, UserRecord};

use googletest::prelude::*;

fn alice() -> UserProfile {
    UserProfile {
        username: "alice".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        email: "alice@example.com".to_string(),
        contact_number: "0123456789".to_string(),
        address: "1 Rabbit Hole".to_string(),
        profile_picture: None,
    }
}

#[test]
fn given_profile_when_welcome_message_then_uses_full_name() {
    assert_that!(alice().welcome_message().as_str(), eq("Welcome, Alice Liddell!"));
}

#[test]
fn given_no_picture_when_avatar_url_then_returns_placeholder() {
    let mut profile = alice();
    assert_that!(profile.avatar_url(), eq(DEFAULT_AVATAR_URL));

    profile.profile_picture = Some(String::new());
    assert_that!(profile.avatar_url(), eq(DEFAULT_AVATAR_URL));
}

#[test]
fn given_picture_when_avatar_url_then_returns_picture() {
    let mut profile = alice();
    profile.set_field(ProfileField::ProfilePicture, "https://img.example.com/a.png");
    assert_that!(profile.avatar_url(), eq("https://img.example.com/a.png"));
}

#[test]
fn given_empty_picture_when_set_field_then_clears_picture() {
    let mut profile = alice();
    profile.profile_picture = Some("https://img.example.com/a.png".to_string());

    profile.set_field(ProfileField::ProfilePicture, "");

    assert_that!(profile.profile_picture, none());
}

#[test]
fn given_field_when_set_then_field_reads_back() {
    let mut profile = alice();
    for field in ProfileField::ALL {
        profile.set_field(field, format!("new-{}", field));
        assert_eq!(profile.field(field), format!("new-{}", field));
    }
    assert_that!(profile.username.as_str(), eq("alice"));
}

#[test]
fn given_profile_when_serialized_then_uses_camel_case_keys() {
    let json = serde_json::to_string(&alice()).unwrap();

    assert!(json.contains("\"firstName\":\"Alice\""));
    assert!(json.contains("\"contactNumber\":\"0123456789\""));
    assert!(!json.contains("profilePicture"));
}

#[test]
fn given_record_when_serialized_then_password_is_omitted() {
    let record = UserRecord::new(alice(), "pw12345");

    let json = serde_json::to_string(&record).unwrap();

    assert!(!json.contains("pw12345"));
    assert_that!(record.username(), eq("alice"));
}

#[test]
fn given_record_when_matching_credentials_then_case_sensitive() {
    let record = UserRecord::new(alice(), "pw12345");

    assert!(record.matches("alice", "pw12345"));
    assert!(!record.matches("Alice", "pw12345"));
    assert!(!record.matches("alice", "PW12345"));
}
