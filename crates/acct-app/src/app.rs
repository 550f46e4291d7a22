//! Composition root.
//!
//! `App` owns both stores and all screen state. Nothing is global: session
//! state is loaded once in [`App::start`] and written back by each command.

use crate::{
    Alert, AppError, EditPolicy, FormController, FormInput, ProfileEditor, Result as AppResult,
    SubmitOutcome, View,
    view::{FormView, ProfileView},
};

use acct_config::Config;
use acct_core::{FieldValidator, FormMode, ProfileField, SessionState, UserProfile};
use acct_db::{UserRepository, open_pool};
use acct_session::{FileKeyValueStore, KeyValueStore, SessionStore};

use log::{info, warn};

/// Behaviour switches taken from [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct AppSettings {
    pub max_field_length: usize,
    pub write_back: bool,
    pub validate_edits: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_field_length: config.validation.max_field_length,
            write_back: config.profile.write_back,
            validate_edits: config.profile.validate_edits,
        }
    }
}

pub struct App<S: KeyValueStore> {
    records: UserRepository,
    session: SessionStore<S>,
    state: SessionState,
    form: FormController,
    editor: Option<ProfileEditor>,
    edit_policy: EditPolicy,
}

impl App<FileKeyValueStore> {
    /// Opens the on-disk stores named by `config`. Call [`App::start`] next.
    pub async fn open(config: &Config) -> AppResult<Self> {
        let database_path = config.database_path()?;
        let session_path = config.session_path()?;

        info!("Opening record store: {}", database_path.display());
        let pool = open_pool(&database_path).await?;

        info!("Opening session store: {}", session_path.display());
        Ok(Self::new(
            UserRepository::new(pool),
            SessionStore::new(FileKeyValueStore::new(session_path)),
            AppSettings::from(config),
        ))
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn new(records: UserRepository, session: SessionStore<S>, settings: AppSettings) -> Self {
        let validator = FieldValidator::new(settings.max_field_length);
        Self {
            records,
            session,
            state: SessionState::logged_out(),
            form: FormController::new(validator),
            editor: None,
            edit_policy: EditPolicy {
                validator,
                validate_edits: settings.validate_edits,
                write_back: settings.write_back,
            },
        }
    }

    /// Prepares the record store and restores the session from the cache.
    ///
    /// Returns an alert when a corrupted session had to be discarded.
    pub async fn start(&mut self) -> AppResult<Option<Alert>> {
        self.records.initialize().await?;

        let loaded = self.session.load().await?;
        self.state = loaded.state;

        match loaded.corruption_error {
            Some(_) => Ok(Some(Alert::error(
                "Your saved session could not be read. Please sign in again.",
            ))),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn records(&self) -> &UserRepository {
        &self.records
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn toggle_mode(&mut self) -> FormMode {
        self.form.toggle_mode()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn view(&self) -> View {
        match (self.state.logged_in, &self.state.cached_profile) {
            (true, Some(profile)) => {
                let shown = self
                    .editor
                    .as_ref()
                    .map_or(profile, |editor| editor.draft());
                View::LoggedIn(ProfileView::new(shown.clone(), self.is_editing()))
            }
            _ => View::Unauthenticated(FormView::new(self.form.mode())),
        }
    }

    /// Submits the form in its current mode.
    pub async fn submit(&mut self) -> AppResult<Alert> {
        if self.state.is_logged_in() {
            return Err(AppError::already_logged_in());
        }

        let outcome = self.form.submit(&self.records, &self.session).await?;
        let alert = Alert::success(outcome.message());

        if let SubmitOutcome::LoggedIn(state) = outcome {
            self.state = state;
        }

        Ok(alert)
    }

    pub async fn sign_in(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> AppResult<Alert> {
        self.form.set_mode(FormMode::Login);
        self.form
            .set_input(FormInput::credentials(username, password));
        self.submit().await
    }

    pub async fn sign_up(&mut self, input: FormInput) -> AppResult<Alert> {
        self.form.set_mode(FormMode::Register);
        self.form.set_input(input);
        self.submit().await
    }

    pub fn begin_edit(&mut self) -> AppResult<()> {
        let profile = self.profile()?.clone();
        self.editor = Some(ProfileEditor::new(profile));
        Ok(())
    }

    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) -> AppResult<()> {
        let editor = self.editor.as_mut().ok_or_else(AppError::not_editing)?;
        editor.set(field, value);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Saves the draft. On failure the editor stays open with the draft intact.
    pub async fn save_profile(&mut self) -> AppResult<Alert> {
        self.profile()?;
        let editor = self.editor.as_ref().ok_or_else(AppError::not_editing)?;

        let saved = editor
            .save(&self.edit_policy, &self.records, &self.session)
            .await?;

        self.state.cached_profile = Some(saved);
        self.editor = None;
        Ok(Alert::success("Profile updated"))
    }

    /// Clears the flag and cached profile. Safe to call when logged out.
    pub async fn logout(&mut self) -> AppResult<Alert> {
        self.session.clear().await?;

        if let Some(ref profile) = self.state.cached_profile {
            info!("Logged out {}", profile.username);
        }

        self.state = SessionState::logged_out();
        self.editor = None;
        self.form.clear_credentials();
        Ok(Alert::success("Logged out"))
    }

    /// The cached profile of the signed-in user.
    pub fn profile(&self) -> AppResult<&UserProfile> {
        match (self.state.logged_in, &self.state.cached_profile) {
            (true, Some(profile)) => Ok(profile),
            _ => {
                warn!("Profile command without an active session");
                Err(AppError::not_logged_in())
            }
        }
    }
}
