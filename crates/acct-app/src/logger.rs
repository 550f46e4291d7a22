use crate::{AppError, Result as AppResult};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, info};

/// Installs the global logger.
///
/// Lines go to `log_file` when given (append mode, never colored), otherwise
/// to stderr so command output on stdout stays clean.
pub fn initialize(
    log_level: acct_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => (open_log_file(path)?.into(), None),
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .format(move |out, message, record| match &colors {
            Some(colors) => write_line(out, message, record, colors.color(record.level())),
            None => write_line(out, message, record, record.level()),
        })
        .chain(output)
        .apply()
        .map_err(|e| AppError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={:?}, file={}", level_filter, path.display()),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// `[<rfc3339> - <level>] <message> [<file>:<line>]`
fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

pub(crate) fn open_log_file(path: &Path) -> AppResult<std::fs::File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| AppError::Logger {
            message: format!("Failed to create log directory {}: {}", dir.display(), e),
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
