pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::form_mode::FormMode;
pub use models::profile_field::ProfileField;
pub use models::session_state::SessionState;
pub use models::user_profile::{DEFAULT_AVATAR_URL, UserProfile};
pub use models::user_record::UserRecord;
pub use validation::field_validator::{FieldValidator, is_valid_email, is_valid_phone};

#[cfg(test)]
mod tests;
