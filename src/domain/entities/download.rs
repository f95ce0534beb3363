//! Download work items and their outcomes.

use std::path::{Path, PathBuf};

/// Kind of guild asset, which decides its sub-folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Custom emoji.
    Emoji,
    /// Custom sticker.
    Sticker,
}

impl AssetKind {
    /// Returns the folder name assets of this kind are stored under.
    #[must_use]
    pub const fn folder_name(self) -> &'static str {
        match self {
            Self::Emoji => "emojis",
            Self::Sticker => "stickers",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emoji => write!(f, "emoji"),
            Self::Sticker => write!(f, "sticker"),
        }
    }
}

/// A single asset to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    url: String,
    destination_folder: PathBuf,
    file_name: String,
}

impl DownloadTask {
    /// Creates a new download task.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        destination_folder: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            destination_folder: destination_folder.into(),
            file_name: file_name.into(),
        }
    }

    /// Returns the source URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the folder the file is written into.
    #[must_use]
    pub fn destination_folder(&self) -> &Path {
        &self.destination_folder
    }

    /// Returns the file name inside the destination folder.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the full destination path.
    #[must_use]
    pub fn destination(&self) -> PathBuf {
        self.destination_folder.join(&self.file_name)
    }
}

/// Result of a successful download call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The destination already existed; nothing was fetched.
    Skipped {
        /// Existing file.
        destination: PathBuf,
    },
    /// The asset was fetched and written.
    Saved {
        /// Written file.
        destination: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
}

impl DownloadOutcome {
    /// Returns the destination path.
    #[must_use]
    pub fn destination(&self) -> &Path {
        match self {
            Self::Skipped { destination } | Self::Saved { destination, .. } => destination,
        }
    }

    /// Returns true if the file was already present.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_joins_folder_and_file() {
        let task = DownloadTask::new(
            "https://cdn.example/emojis/1.png?v=1",
            "output/Guild/emojis",
            "smile.png",
        );

        assert_eq!(
            task.destination(),
            PathBuf::from("output/Guild/emojis/smile.png")
        );
    }

    #[test]
    fn test_asset_folder_names() {
        assert_eq!(AssetKind::Emoji.folder_name(), "emojis");
        assert_eq!(AssetKind::Sticker.folder_name(), "stickers");
    }

    #[test]
    fn test_outcome_destination() {
        let outcome = DownloadOutcome::Saved {
            destination: PathBuf::from("a/b.png"),
            bytes: 3,
        };
        assert_eq!(outcome.destination(), Path::new("a/b.png"));
        assert!(!outcome.is_skipped());
    }
}
