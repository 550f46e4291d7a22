#![allow(dead_code)]

use acct_app::{App, AppSettings, FormInput};
use acct_db::{UserRepository, open_in_memory};
use acct_session::{
    KeyValueStore, MemoryKeyValueStore, Result as SessionResult, SessionError, SessionStore,
};

use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

pub type SharedStore = Arc<MemoryKeyValueStore>;

/// Stores that outlive a single `App`, so a test can simulate a restart.
pub struct TestDevice {
    pub records: UserRepository,
    pub store: SharedStore,
}

impl TestDevice {
    pub async fn new() -> Self {
        let pool = open_in_memory()
            .await
            .expect("Failed to create test pool");

        Self {
            records: UserRepository::new(pool),
            store: Arc::new(MemoryKeyValueStore::new()),
        }
    }

    /// Starts a fresh app over this device's stores.
    pub async fn start(&self, settings: AppSettings) -> App<SharedStore> {
        let mut app = App::new(
            UserRepository::new(self.records.pool().clone()),
            SessionStore::new(Arc::clone(&self.store)),
            settings,
        );
        app.start().await.expect("Failed to start app");
        app
    }
}

pub async fn create_test_app() -> (TestDevice, App<SharedStore>) {
    let device = TestDevice::new().await;
    let app = device.start(AppSettings::default()).await;
    (device, app)
}

/// Creates an app with `username` registered and signed in.
pub async fn create_signed_in_app(
    username: &str,
    settings: AppSettings,
) -> (TestDevice, App<SharedStore>) {
    let device = TestDevice::new().await;
    let mut app = device.start(settings).await;

    app.sign_up(create_test_input(username, "pw12345"))
        .await
        .expect("Failed to register");
    app.sign_in(username, "pw12345")
        .await
        .expect("Failed to sign in");

    (device, app)
}

/// Creates a complete registration form
pub fn create_test_input(username: &str, password: &str) -> FormInput {
    FormInput {
        username: username.to_string(),
        password: password.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        email: format!("{}@example.com", username),
        contact_number: "0123456789".to_string(),
        address: "1 Rabbit Hole".to_string(),
        profile_picture: String::new(),
    }
}

/// Session store whose every write fails.
pub struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> SessionResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> SessionResult<()> {
        Err(SessionError::file_write(
            PathBuf::from("session.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only file system"),
        ))
    }

    async fn remove(&self, _key: &str) -> SessionResult<()> {
        Ok(())
    }
}

/// Memory store whose writes can be switched off mid-test.
#[derive(Default)]
pub struct SwitchableStore {
    inner: MemoryKeyValueStore,
    writes_fail: AtomicBool,
}

impl SwitchableStore {
    pub fn fail_writes(&self) {
        self.writes_fail.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> SessionResult<()> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(SessionError::file_write(
                PathBuf::from("session.json"),
                io::Error::new(io::ErrorKind::StorageFull, "no space left on device"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SwitchableStore {
    async fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.check_writable()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> SessionResult<()> {
        self.check_writable()?;
        self.inner.remove(key).await
    }
}

/// Sets an environment variable for the life of the guard.
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
