use crate::Alert;

use acct_core::CoreError;
use acct_db::DbError;
use acct_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Username already exists: {username} {location}")]
    UsernameTaken {
        username: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Already signed in {location}")]
    AlreadyLoggedIn { location: ErrorLocation },

    #[error("Profile is not being edited {location}")]
    NotEditing { location: ErrorLocation },

    #[error("Config error: {0}")]
    Config(#[from] acct_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl AppError {
    /// Message shown to the user in an alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source } => source.user_message(),
            Self::InvalidCredentials { .. } => "Invalid credentials".to_string(),
            Self::UsernameTaken { .. } => "Username already exists".to_string(),
            Self::Storage { message, .. } => message.clone(),
            Self::NotLoggedIn { .. } => "Please sign in first".to_string(),
            Self::AlreadyLoggedIn { .. } => "Already signed in; log out first".to_string(),
            Self::NotEditing { .. } => "Profile is not being edited".to_string(),
            Self::Config(e) => e.to_string(),
            Self::Logger { message } => message.clone(),
        }
    }

    pub fn alert(&self) -> Alert {
        Alert::from(self)
    }

    /// Validation errors are raised before any persistence call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_logged_in() -> Self {
        Self::AlreadyLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_editing() -> Self {
        Self::NotEditing {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AppError {
    fn from(source: CoreError) -> Self {
        Self::Validation { source }
    }
}

impl From<DbError> for AppError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        match error {
            DbError::UsernameTaken { username, .. } => Self::UsernameTaken {
                username,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                warn!("Record store failure: {}", other);
                Self::storage(other.reason())
            }
        }
    }
}

impl From<SessionError> for AppError {
    #[track_caller]
    fn from(error: SessionError) -> Self {
        warn!("Session store failure: {} ({})", error, error.recovery_hint());
        Self::storage(error.reason())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
