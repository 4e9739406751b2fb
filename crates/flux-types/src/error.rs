//! Error types for FluxOS.

use std::io;

/// Errors produced by the FluxOS framework.
#[derive(Debug, thiserror::Error)]
pub enum FluxError {
    #[error("SDI error: {0}")]
    Sdi(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FluxError>;
