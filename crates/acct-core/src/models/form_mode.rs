use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which form the unauthenticated screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// Credentials only
    #[default]
    Login,
    /// Credentials plus the full profile
    Register,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Welcome Back!",
            Self::Register => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Login => "Please sign in to continue",
            Self::Register => "Please fill in the form to continue",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Sign Up",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            Self::Login => "New user? Create an account",
            Self::Register => "Already have an account? Sign in",
        }
    }
}

impl FromStr for FormMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            _ => Err(CoreError::InvalidFormMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
