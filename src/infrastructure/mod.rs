//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Discord API client.
pub mod discord;
/// Asset downloads to disk.
pub mod download;
/// Token storage adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use discord::DiscordClient;
pub use download::HttpAssetDownloader;
pub use storage::KeyringTokenStorage;
