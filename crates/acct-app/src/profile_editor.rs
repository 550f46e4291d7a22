use crate::Result as AppResult;

use acct_core::{FieldValidator, ProfileField, UserProfile};
use acct_db::UserRepository;
use acct_session::{KeyValueStore, SessionStore};

use log::{info, warn};

/// How saved edits are checked and where they are written.
#[derive(Debug, Clone, Copy)]
pub struct EditPolicy {
    pub validator: FieldValidator,
    pub validate_edits: bool,
    pub write_back: bool,
}

/// Draft copy of the cached profile being edited in place.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    original: UserProfile,
    draft: UserProfile,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            draft: profile.clone(),
            original: profile,
        }
    }

    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Persists the draft and returns it.
    ///
    /// With `write_back` the record store is updated before the cache. A
    /// failed record write leaves the cache untouched, and a failed cache
    /// write puts the original profile back into the record store.
    pub async fn save<S: KeyValueStore>(
        &self,
        policy: &EditPolicy,
        records: &UserRepository,
        session: &SessionStore<S>,
    ) -> AppResult<UserProfile> {
        if policy.validate_edits {
            policy.validator.validate_profile(&self.draft)?;
        }

        let record_updated = policy.write_back && records.update_profile(&self.draft).await?;
        if policy.write_back && !record_updated {
            warn!(
                "No record for {}; profile saved to session cache only",
                self.draft.username
            );
        }

        if let Err(e) = session.save_profile(&self.draft).await {
            if record_updated {
                self.restore_record(records).await;
            }
            return Err(e.into());
        }

        info!("Saved profile for {}", self.draft.username);
        Ok(self.draft.clone())
    }

    async fn restore_record(&self, records: &UserRepository) {
        match records.update_profile(&self.original).await {
            Ok(_) => info!("Restored record for {} after cache failure", self.original.username),
            Err(e) => warn!("Failed to restore record for {}: {}", self.original.username, e),
        }
    }
}
