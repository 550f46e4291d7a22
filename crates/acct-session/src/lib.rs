pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod load_result;
pub mod memory_store;
pub mod session_store;

pub use error::{Result, SessionError};
pub use file_store::FileKeyValueStore;
pub use key_value_store::KeyValueStore;
pub use load_result::LoadResult;
pub use memory_store::MemoryKeyValueStore;
pub use session_store::{LOGGED_IN_KEY, LOGGED_IN_VALUE, PROFILE_KEY, SessionStore};

#[cfg(test)]
mod tests;
