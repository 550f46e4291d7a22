//! Screen view models. Rendering is left to the caller; `Display` gives a
//! plain-text rendering for the command line.

use acct_core::{FormMode, ProfileField, UserProfile};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Unauthenticated(FormView),
    LoggedIn(ProfileView),
}

impl View {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: FormMode,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub switch_prompt: &'static str,
    /// Input placeholders in display order
    pub fields: Vec<&'static str>,
}

impl FormView {
    pub fn new(mode: FormMode) -> Self {
        let mut fields = vec!["Username", "Password"];
        if mode == FormMode::Register {
            fields.extend(ProfileField::ALL.iter().map(ProfileField::label));
        }

        Self {
            mode,
            title: mode.title(),
            subtitle: mode.subtitle(),
            submit_label: mode.submit_label(),
            switch_prompt: mode.switch_prompt(),
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub welcome: String,
    pub avatar_url: String,
    pub profile: UserProfile,
    pub editing: bool,
}

impl ProfileView {
    pub fn new(profile: UserProfile, editing: bool) -> Self {
        Self {
            welcome: profile.welcome_message(),
            avatar_url: profile.avatar_url().to_string(),
            profile,
            editing,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated(form) => {
                writeln!(f, "{}", form.title)?;
                writeln!(f, "{}", form.subtitle)?;
                write!(f, "{}", form.switch_prompt)
            }
            Self::LoggedIn(view) => {
                let profile = &view.profile;
                writeln!(f, "{}", view.welcome)?;
                writeln!(f, "Avatar: {}", view.avatar_url)?;
                writeln!(f, "Name: {}", profile.display_name())?;
                writeln!(f, "Email: {}", profile.email)?;
                writeln!(f, "Contact: {}", profile.contact_number)?;
                write!(f, "Address: {}", profile.address)
            }
        }
    }
}
