//! Error types for hudini.

use std::io;

/// Errors produced by hudini.
#[derive(Debug, thiserror::Error)]
pub enum HudiniError {
    /// A bounds provider failed while an element was being measured.
    #[error("bounds error: {0}")]
    Bounds(String),

    #[error("invalid {axis} alignment: {value:?}")]
    InvalidAlign { axis: &'static str, value: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("scene error: {0}")]
    Scene(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HudiniError>;
