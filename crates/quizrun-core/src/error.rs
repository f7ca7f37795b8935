//! Error taxonomy for quizrun.
//!
//! Typed so callers can classify failures (missing file vs. corrupt file vs.
//! catalog/result drift) without string matching. Everything here is fatal
//! for the current session; nothing is retried internally.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A persisted payload could not be decoded back into a value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The (de-obfuscated) bytes are not valid UTF-8 text.
    #[error("payload is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The text is not well-formed JSON.
    #[error("payload is not well-formed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while loading or validating a quiz catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("quiz file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The catalog file could not be read.
    #[error("failed to read quiz file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The raw bytes could not be decoded to JSON.
    #[error("quiz payload could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    /// The top-level payload is missing or mistypes a required field.
    #[error("invalid quiz format: {reason}")]
    Format { reason: String },

    /// A specific question fails validation. Positions are 1-based.
    #[error("question {position}: {reason}")]
    Question { position: usize, reason: String },
}

impl CatalogError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        CatalogError::Format {
            reason: reason.into(),
        }
    }

    pub(crate) fn question(position: usize, reason: impl Into<String>) -> Self {
        CatalogError::Question {
            position,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading the tool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised while loading or saving a result record.
#[derive(Debug, Error)]
pub enum ResultError {
    /// No result file exists at the path. Fatal for resume mode only.
    #[error("result file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The result file could not be read or written.
    #[error("failed to access result file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted bytes are corrupt or undecodable. No auto-repair.
    #[error("result payload could not be decoded: {0}")]
    Format(#[from] DecodeError),
}

/// Errors raised while driving an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A pending id in the result record has no matching question in the
    /// loaded catalog. Signals catalog/result drift; fatal for the session.
    #[error("question id {id} not found in quiz '{quiz}'")]
    QuestionNotFound { id: i64, quiz: String },

    /// The UI collaborator failed on terminal I/O.
    #[error("terminal i/o failed: {0}")]
    Ui(#[from] io::Error),

    /// Persisting progress mid-session failed.
    #[error("failed to persist progress: {0}")]
    Persist(#[from] ResultError),
}
