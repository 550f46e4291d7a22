use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Username already exists: {username} {location}")]
    UsernameTaken {
        username: String,
        location: ErrorLocation,
    },

    #[error("Invalid user row: {message} {location}")]
    InvalidRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Whether this error is a uniqueness conflict rather than a storage failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken { .. })
    }

    /// The underlying failure, without variant prefix or source location.
    pub fn reason(&self) -> String {
        match self {
            Self::Sqlx { source, .. } => source.to_string(),
            Self::Migration { source, .. } => source.to_string(),
            Self::Initialization { message, .. } | Self::InvalidRow { message, .. } => {
                message.clone()
            }
            Self::UsernameTaken { username, .. } => {
                format!("Username already exists: {}", username)
            }
        }
    }

    #[track_caller]
    pub fn username_taken(username: impl Into<String>) -> Self {
        Self::UsernameTaken {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_row(message: impl Into<String>) -> Self {
        Self::InvalidRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
