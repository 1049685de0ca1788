//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError so the command
//! boundary has a single place to report failures. Session file I/O has its
//! own typed errors (`LoadError`, `SaveError`) that callers can match on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading a session file back into memory.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read session file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed session data: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },

    #[error("session #{index} has an empty activity label")]
    EmptyActivity { index: usize },
}

impl LoadError {
    /// True when the file itself could not be read (missing, permissions),
    /// false when it was read but its content is not a session list.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, LoadError::Read { .. })
    }
}

/// Failure while writing the session list to disk.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot encode sessions: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session files
    // ---------------------------
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("Save failed: {0}")]
    Save(#[from] SaveError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
