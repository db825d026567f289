// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for llm-checker
//!
//! Hardware detection never fails (every probe degrades to a fallback), so
//! these errors only cover model descriptors, catalogue files and settings.

use thiserror::Error;

/// Main error type for llm-checker operations
#[derive(Error, Debug)]
pub enum CheckerError {
    /// A model descriptor has a missing or out-of-range field
    #[error("Invalid model '{name}': {reason}")]
    InvalidModel { name: String, reason: String },

    /// A variant tag could not be parsed
    #[error("Invalid model tag: {0}")]
    InvalidTag(String),

    /// Catalogue file errors
    #[error("Catalogue error: {0}")]
    Catalogue(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),
}

/// Result type alias for llm-checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

impl CheckerError {
    /// Build a [`CheckerError::InvalidModel`] for the named model.
    pub fn invalid_model(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckerError::InvalidModel {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CheckerError {
    fn from(err: toml::de::Error) -> Self {
        CheckerError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CheckerError {
    fn from(err: toml::ser::Error) -> Self {
        CheckerError::Toml(err.to_string())
    }
}
