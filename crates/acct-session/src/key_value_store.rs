use crate::Result as SessionResult;

use std::sync::Arc;

use async_trait::async_trait;

/// String-keyed, string-valued persistence for session data.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> SessionResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> SessionResult<()>;
}

/// Lets several owners share one store.
#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key).await
    }
}
