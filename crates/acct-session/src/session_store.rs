//! Typed session access over a [`KeyValueStore`].
//!
//! Two keys are used: [`LOGGED_IN_KEY`] holds `"true"` while a session is
//! active and is absent otherwise; [`PROFILE_KEY`] holds the cached
//! [`UserProfile`] as JSON.

use crate::{KeyValueStore, LoadResult, Result as SessionResult, SessionError};

use acct_core::{SessionState, UserProfile};

use log::{info, warn};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const LOGGED_IN_VALUE: &str = "true";
pub const PROFILE_KEY: &str = "userProfile";

pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restores session state at startup.
    ///
    /// The profile comes from the cache, not the record store. A flag
    /// without a readable profile is cleared and reported as logged out.
    pub async fn load(&self) -> SessionResult<LoadResult> {
        if !self.is_flag_set().await? {
            return Ok(LoadResult::restored(SessionState::logged_out()));
        }

        match self.cached_profile().await {
            Ok(Some(profile)) => {
                info!("Restored session for {}", profile.username);
                Ok(LoadResult::restored(SessionState::logged_in(profile)))
            }
            Ok(None) => {
                warn!("Session flag set without a cached profile; clearing session");
                self.clear().await?;
                Ok(LoadResult::restored(SessionState::logged_out()))
            }
            Err(SessionError::Corrupted { message, .. }) => {
                warn!("Cached profile corrupted; clearing session: {message}");
                self.clear().await?;
                Ok(LoadResult {
                    state: SessionState::logged_out(),
                    corruption_error: Some(message),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Caches the profile, then sets the logged-in flag.
    pub async fn start_session(&self, profile: &UserProfile) -> SessionResult<SessionState> {
        self.save_profile(profile).await?;
        self.store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE).await?;
        Ok(SessionState::logged_in(profile.clone()))
    }

    pub async fn save_profile(&self, profile: &UserProfile) -> SessionResult<()> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json).await
    }

    pub async fn cached_profile(&self) -> SessionResult<Option<UserProfile>> {
        match self.store.get(PROFILE_KEY).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| SessionError::corrupted(PROFILE_KEY, e.to_string())),
            None => Ok(None),
        }
    }

    pub async fn is_flag_set(&self) -> SessionResult<bool> {
        Ok(self.store.get(LOGGED_IN_KEY).await?.as_deref() == Some(LOGGED_IN_VALUE))
    }

    /// Removes the flag and the cached profile.
    pub async fn clear(&self) -> SessionResult<()> {
        self.store.remove(LOGGED_IN_KEY).await?;
        self.store.remove(PROFILE_KEY).await
    }
}
