use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Editable profile fields. Username and password are not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    ContactNumber,
    Address,
    ProfilePicture,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::ContactNumber,
        Self::Address,
        Self::ProfilePicture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::ContactNumber => "contact_number",
            Self::Address => "address",
            Self::ProfilePicture => "profile_picture",
        }
    }

    /// Input placeholder text
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::ContactNumber => "Contact Number",
            Self::Address => "Address",
            Self::ProfilePicture => "Profile Picture URL",
        }
    }
}

impl FromStr for ProfileField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "contact_number" => Ok(Self::ContactNumber),
            "address" => Ok(Self::Address),
            "profile_picture" => Ok(Self::ProfilePicture),
            _ => Err(CoreError::InvalidProfileField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
