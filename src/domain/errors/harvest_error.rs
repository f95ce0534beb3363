//! Top-level error for a harvest run.

use thiserror::Error;

use super::{ApiError, DownloadError, SchedulerError};

/// Any failure that aborts a harvest run.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HarvestError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}
