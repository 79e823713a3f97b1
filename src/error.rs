//! Start-up error types
//!
//! The sorting core has no recoverable failures: every parameter is clamped and
//! unknown algorithm names fall back to bubble sort. [`AppError`] covers what can
//! go wrong before the frame loop starts (reading configuration, opening the log
//! file, setting up the terminal).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected layout
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Logger could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
