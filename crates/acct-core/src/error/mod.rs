use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid phone number: {value} {location}")]
    InvalidPhone {
        value: String,
        location: ErrorLocation,
    },

    #[error("Field {field} exceeds maximum length ({max}) {location}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid form mode: {value} {location}")]
    InvalidFormMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile field: {value} {location}")]
    InvalidProfileField {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message shown to the user in an alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { .. } => "Please fill in all fields".to_string(),
            Self::InvalidEmail { .. } => "Invalid email address".to_string(),
            Self::InvalidPhone { .. } => "Invalid phone number".to_string(),
            Self::FieldTooLong { field, max, .. } => {
                format!("{} must not exceed {} characters", field, max)
            }
            Self::InvalidFormMode { value, .. } => format!("Unknown form mode: {}", value),
            Self::InvalidProfileField { value, .. } => format!("Unknown profile field: {}", value),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::InvalidEmail {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_phone(value: impl Into<String>) -> Self {
        Self::InvalidPhone {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field_too_long(field: &'static str, max: usize) -> Self {
        Self::FieldTooLong {
            field,
            max,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
