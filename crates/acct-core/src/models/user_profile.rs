//! Profile data shown on the logged-in screen and cached in the session store.

use crate::ProfileField;

use serde::{Deserialize, Serialize};

/// Shown when the profile has no picture URL.
pub const DEFAULT_AVATAR_URL: &str = "https://placekitten.com/200/200";

/// A user record without its password.
///
/// Serialized with camelCase keys; this is the `userProfile` value in the
/// session store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome, {}!", self.display_name())
    }

    pub fn avatar_url(&self) -> &str {
        match self.profile_picture.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_AVATAR_URL,
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::ContactNumber => &self.contact_number,
            ProfileField::Address => &self.address,
            ProfileField::ProfilePicture => self.profile_picture.as_deref().unwrap_or(""),
        }
    }

    /// Set a single field. An empty picture URL clears the picture.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::ContactNumber => self.contact_number = value,
            ProfileField::Address => self.address = value,
            ProfileField::ProfilePicture => {
                self.profile_picture = if value.is_empty() { None } else { Some(value) }
            }
        }
    }
}
