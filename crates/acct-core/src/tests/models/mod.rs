mod form_mode;
mod profile_field;
mod user_profile;
