pub mod form_mode;
pub mod profile_field;
pub mod session_state;
pub mod user_profile;
pub mod user_record;
