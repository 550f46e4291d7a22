//! Client-side form validation.
//!
//! Checks run in a fixed order and stop at the first failure: required
//! fields, then length limits, then email shape, then phone shape.

use crate::{CoreError, Result as CoreErrorResult, UserProfile};

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_MAX_FIELD_LENGTH: usize = 256;

/// `local@domain.tld`
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex")
});

/// Exactly ten ASCII digits
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validates credentials and profile fields before anything is persisted.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator {
    max_field_length: usize,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FIELD_LENGTH)
    }
}

impl FieldValidator {
    pub fn new(max_field_length: usize) -> Self {
        Self { max_field_length }
    }

    pub fn max_field_length(&self) -> usize {
        self.max_field_length
    }

    /// Login form: username and password only.
    #[track_caller]
    pub fn validate_credentials(&self, username: &str, password: &str) -> CoreErrorResult<()> {
        let fields = [("username", username), ("password", password)];
        self.validate_required(&fields)?;
        self.validate_lengths(&fields)
    }

    /// Registration form: credentials plus every required profile field.
    #[track_caller]
    pub fn validate_registration(
        &self,
        profile: &UserProfile,
        password: &str,
    ) -> CoreErrorResult<()> {
        let mut fields = vec![("username", profile.username.as_str()), ("password", password)];
        fields.extend(Self::profile_fields(profile));

        self.validate_required(&fields)?;
        self.validate_lengths(&fields)?;
        if let Some(picture) = profile.profile_picture.as_deref() {
            self.validate_lengths(&[("profile_picture", picture)])?;
        }
        Self::validate_contact(profile)
    }

    /// Edited profile: same rules as registration minus the password.
    #[track_caller]
    pub fn validate_profile(&self, profile: &UserProfile) -> CoreErrorResult<()> {
        let fields = Self::profile_fields(profile);

        self.validate_required(&fields)?;
        self.validate_lengths(&fields)?;
        if let Some(picture) = profile.profile_picture.as_deref() {
            self.validate_lengths(&[("profile_picture", picture)])?;
        }
        Self::validate_contact(profile)
    }

    fn profile_fields(profile: &UserProfile) -> Vec<(&'static str, &str)> {
        vec![
            ("first_name", profile.first_name.as_str()),
            ("last_name", profile.last_name.as_str()),
            ("email", profile.email.as_str()),
            ("contact_number", profile.contact_number.as_str()),
            ("address", profile.address.as_str()),
        ]
    }

    #[track_caller]
    fn validate_required(&self, fields: &[(&'static str, &str)]) -> CoreErrorResult<()> {
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some(&(name, _)) => Err(CoreError::missing_field(name)),
            None => Ok(()),
        }
    }

    #[track_caller]
    fn validate_lengths(&self, fields: &[(&'static str, &str)]) -> CoreErrorResult<()> {
        match fields
            .iter()
            .find(|(_, value)| value.chars().count() > self.max_field_length)
        {
            Some(&(name, _)) => Err(CoreError::field_too_long(name, self.max_field_length)),
            None => Ok(()),
        }
    }

    #[track_caller]
    fn validate_contact(profile: &UserProfile) -> CoreErrorResult<()> {
        if !is_valid_email(&profile.email) {
            return Err(CoreError::invalid_email(&profile.email));
        }
        if !is_valid_phone(&profile.contact_number) {
            return Err(CoreError::invalid_phone(&profile.contact_number));
        }
        Ok(())
    }
}
