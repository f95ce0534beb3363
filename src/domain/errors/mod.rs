//! Domain error types.

mod api_error;
mod config_error;
mod download_error;
mod harvest_error;
mod scheduler_error;
mod secret_error;

pub use api_error::ApiError;
pub use config_error::ConfigError;
pub use download_error::DownloadError;
pub use harvest_error::HarvestError;
pub use scheduler_error::SchedulerError;
pub use secret_error::SecretError;
