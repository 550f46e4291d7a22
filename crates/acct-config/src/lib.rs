mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod profile_config;
mod session_config;
mod validation_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use profile_config::ProfileConfig;
pub use session_config::SessionConfig;
pub use validation_config::ValidationConfig;

const DEFAULT_CONFIG_DIR: &str = ".acct";
const CONFIG_FILENAME: &str = "config.toml";
/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_PROFILE_WRITE_BACK: bool = true;
const DEFAULT_PROFILE_VALIDATE_EDITS: bool = true;

#[cfg(test)]
mod tests;
