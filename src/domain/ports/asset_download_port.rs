//! Asset download port definition.

use async_trait::async_trait;

use crate::domain::entities::{DownloadOutcome, DownloadTask};
use crate::domain::errors::DownloadError;

/// Port for fetching a single asset into the local folder tree.
#[async_trait]
pub trait AssetDownloadPort: Send + Sync {
    /// Downloads the task's URL to its destination unless the file exists.
    async fn download(&self, task: &DownloadTask) -> Result<DownloadOutcome, DownloadError>;
}
