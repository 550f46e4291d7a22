//! Sign-in / sign-up form.
//!
//! Validation always runs before the record store is touched, so a rejected
//! submission never writes anything.

use crate::{AppError, Result as AppResult};

use acct_core::{FieldValidator, FormMode, SessionState, UserProfile, UserRecord};
use acct_db::UserRepository;
use acct_session::{KeyValueStore, SessionStore};

use log::{info, warn};

/// Raw form field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub profile_picture: String,
}

impl FormInput {
    pub fn credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Profile portion of the form. An empty picture URL means no picture.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            profile_picture: Some(self.profile_picture.clone()).filter(|url| !url.is_empty()),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoggedIn(SessionState),
    Registered { username: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::LoggedIn(_) => "Logged in successfully",
            Self::Registered { .. } => "Registration successful",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    input: FormInput,
    validator: FieldValidator,
}

impl FormController {
    pub fn new(validator: FieldValidator) -> Self {
        Self {
            mode: FormMode::default(),
            input: FormInput::default(),
            validator,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> FormMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut FormInput {
        &mut self.input
    }

    pub fn set_input(&mut self, input: FormInput) {
        self.input = input;
    }

    pub fn clear_credentials(&mut self) {
        self.input.username.clear();
        self.input.password.clear();
    }

    /// Checks the current input against the rules for the current mode.
    pub fn validate(&self) -> AppResult<()> {
        match self.mode {
            FormMode::Login => self
                .validator
                .validate_credentials(&self.input.username, &self.input.password)?,
            FormMode::Register => self
                .validator
                .validate_registration(&self.input.to_profile(), &self.input.password)?,
        }
        Ok(())
    }

    /// Validates, then logs in or registers depending on the mode.
    ///
    /// Login caches the matched profile and sets the session flag.
    /// Registration writes the record and switches to login mode without
    /// starting a session.
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        records: &UserRepository,
        session: &SessionStore<S>,
    ) -> AppResult<SubmitOutcome> {
        if let Err(e) = self.validate() {
            warn!("Rejected {} form: {}", self.mode, e);
            return Err(e);
        }

        match self.mode {
            FormMode::Login => self.login(records, session).await,
            FormMode::Register => self.register(records).await,
        }
    }

    async fn login<S: KeyValueStore>(
        &mut self,
        records: &UserRepository,
        session: &SessionStore<S>,
    ) -> AppResult<SubmitOutcome> {
        let record = records
            .authenticate(&self.input.username, &self.input.password)
            .await?;

        let Some(record) = record else {
            warn!("Login failed for {}", self.input.username);
            return Err(AppError::invalid_credentials());
        };

        let state = session.start_session(&record.profile).await?;
        info!("Logged in as {}", record.username());
        Ok(SubmitOutcome::LoggedIn(state))
    }

    async fn register(&mut self, records: &UserRepository) -> AppResult<SubmitOutcome> {
        let record = UserRecord::new(self.input.to_profile(), self.input.password.clone());

        records.register(&record).await?;

        info!("Registered {}", record.username());
        self.mode = FormMode::Login;
        self.input.password.clear();
        Ok(SubmitOutcome::Registered {
            username: record.username().to_string(),
        })
    }
}
