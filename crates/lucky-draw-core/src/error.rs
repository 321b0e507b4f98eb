//! Error types for lucky-draw-core

use std::path::PathBuf;
use thiserror::Error;

use crate::draw::DrawState;

/// Main error type for lucky draw operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings document: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither the user nor the default settings file could be used.
    #[error("Config files broken: {0}")]
    Configuration(String),

    /// A loaded settings document lacks a key required by the built-in schema.
    #[error("Settings document is missing required key '{missing}'")]
    Validation { missing: String },

    #[error("Cannot {operation} while the draw is {state}")]
    InvalidState {
        operation: &'static str,
        state: DrawState,
    },

    #[error("No more candidates! Please use the reset button to reset.")]
    EmptyPool,

    #[error("Invalid image {path}: {message}")]
    Image { path: PathBuf, message: String },

    #[error("Invalid color '{0}', expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("Invalid font descriptor '{0}', expected 'Family Size [styles...]'")]
    InvalidFont(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a user-facing warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyPool)
    }
}

/// Result type alias for lucky draw operations
pub type Result<T> = std::result::Result<T, Error>;
