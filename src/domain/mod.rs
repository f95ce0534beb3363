//! Domain layer with core entities, errors, pure services and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Naming and URL rules.
pub mod services;

pub use entities::{AssetKind, AuthToken, DownloadOutcome, DownloadTask, Guild, GuildDetail};
pub use errors::{ApiError, ConfigError, DownloadError, HarvestError, SchedulerError};
pub use ports::{ApiResponse, AssetDownloadPort, GuildDataPort, TokenStoragePort};
pub use services::{AssetLocator, sanitize_name};
