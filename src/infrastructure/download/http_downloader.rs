//! Streaming HTTP asset downloader.

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::domain::entities::{DownloadOutcome, DownloadTask};
use crate::domain::errors::{ApiError, DownloadError};
use crate::domain::ports::AssetDownloadPort;

const USER_AGENT: &str = concat!("stashcord/", env!("CARGO_PKG_VERSION"));

/// Downloads CDN assets straight to disk.
///
/// An existing destination file is never touched, whatever its content.
#[derive(Debug, Clone)]
pub struct HttpAssetDownloader {
    client: Client,
}

impl HttpAssetDownloader {
    /// Creates a downloader with its own HTTP client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Creates a downloader sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Creates `folder` and its ancestors, accepting a concurrent creator.
async fn ensure_folder(folder: &Path) -> Result<(), DownloadError> {
    if let Err(e) = fs::create_dir_all(folder).await {
        let is_dir = fs::metadata(folder).await.is_ok_and(|m| m.is_dir());
        if !(e.kind() == ErrorKind::AlreadyExists && is_dir) {
            return Err(DownloadError::io(folder, e));
        }
    }
    Ok(())
}

#[async_trait]
impl AssetDownloadPort for HttpAssetDownloader {
    async fn download(&self, task: &DownloadTask) -> Result<DownloadOutcome, DownloadError> {
        let url = task.url();
        let destination = task.destination();

        let exists = fs::try_exists(&destination)
            .await
            .map_err(|e| DownloadError::io(&destination, e))?;
        if exists {
            info!(path = %destination.display(), "Already exists, skipping");
            return Ok(DownloadOutcome::Skipped { destination });
        }

        info!(url, "Fetching");
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Err(DownloadError::EmptyBody {
                url: url.to_string(),
            });
        }

        ensure_folder(task.destination_folder()).await?;

        let file = fs::File::create(&destination)
            .await
            .map_err(|e| DownloadError::io(&destination, e))?;
        let mut writer = BufWriter::new(file);
        let mut written: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DownloadError::stream(url, e.to_string()))?
        {
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| DownloadError::io(&destination, e))?;
            written += chunk.len() as u64;
        }

        writer
            .flush()
            .await
            .map_err(|e| DownloadError::io(&destination, e))?;

        debug!(url, bytes = written, "Body streamed");
        info!(url, path = %destination.display(), "Saved");

        Ok(DownloadOutcome::Saved {
            destination,
            bytes: written,
        })
    }
}
