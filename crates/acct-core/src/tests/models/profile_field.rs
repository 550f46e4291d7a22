use crate::ProfileField;

use std::str::FromStr;

#[test]
fn test_profile_field_round_trips_through_str() {
    for field in ProfileField::ALL {
        assert_eq!(ProfileField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_profile_field_rejects_credentials() {
    assert!(ProfileField::from_str("username").is_err());
    assert!(ProfileField::from_str("password").is_err());
}
