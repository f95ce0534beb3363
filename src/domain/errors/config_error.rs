//! Startup and configuration error types.

use thiserror::Error;

use super::SecretError;

/// Errors raised while preparing a run, before any network I/O.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error(
        "no authentication token available; pass --token, set DISCORD_TOKEN or store one with --save-token"
    )]
    MissingToken,

    #[error("failed to determine config directory")]
    ConfigDirNotFound,

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("secure storage error: {0}")]
    Secret(#[from] SecretError),
}
