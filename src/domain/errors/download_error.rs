//! Asset download error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while fetching an asset and writing it to disk.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DownloadError {
    #[error("fetch {url} failed with response {status} {status_text}")]
    HttpStatus {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error("{url} body is empty")]
    EmptyBody { url: String },

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("reading body of {url} failed: {message}")]
    Stream { url: String, message: String },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Creates HTTP status error.
    #[must_use]
    pub fn http_status(url: impl Into<String>, status: u16, status_text: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            status_text: status_text.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates stream error.
    #[must_use]
    pub fn stream(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stream {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the HTTP status code, if the server answered with a failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = DownloadError::http_status("https://cdn/x.png", 404, "Not Found");
        assert_eq!(
            err.to_string(),
            "fetch https://cdn/x.png failed with response 404 Not Found"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = DownloadError::io(
            "out/a.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }
}
