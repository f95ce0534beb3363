//! Custom guild sticker entity.

use serde::{Deserialize, Serialize};

/// Sticker file format as reported by Discord's `format_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum StickerFormat {
    /// Static PNG.
    Png,
    /// Animated PNG.
    Apng,
    /// Lottie animation (JSON).
    Lottie,
    /// Animated GIF.
    Gif,
    /// Format code this client does not know about.
    Unknown(u8),
}

impl StickerFormat {
    /// Returns the CDN file extension for this format.
    ///
    /// APNG and unknown formats are served with a `png` extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Lottie => "json",
            Self::Png | Self::Apng | Self::Unknown(_) => "png",
        }
    }

    /// Returns the raw `format_type` code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Png => 1,
            Self::Apng => 2,
            Self::Lottie => 3,
            Self::Gif => 4,
            Self::Unknown(code) => code,
        }
    }
}

impl From<u8> for StickerFormat {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Png,
            2 => Self::Apng,
            3 => Self::Lottie,
            4 => Self::Gif,
            other => Self::Unknown(other),
        }
    }
}

impl From<StickerFormat> for u8 {
    fn from(value: StickerFormat) -> Self {
        value.code()
    }
}

/// A custom sticker owned by a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    id: String,
    name: String,
    format: StickerFormat,
    kind: Option<u8>,
    tags: Option<String>,
    description: Option<String>,
}

impl Sticker {
    /// Creates a new sticker.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, format: StickerFormat) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            format,
            kind: None,
            tags: None,
            description: None,
        }
    }

    /// Sets the sticker type (1 = standard, 2 = guild).
    #[must_use]
    pub const fn with_kind(mut self, kind: Option<u8>) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the autocomplete tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Returns the sticker ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the sticker name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sticker format.
    #[must_use]
    pub const fn format(&self) -> StickerFormat {
        self.format
    }

    /// Returns the sticker type code, if reported.
    #[must_use]
    pub const fn kind(&self) -> Option<u8> {
        self.kind
    }

    /// Returns the sticker tags, if any.
    #[must_use]
    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    /// Returns the sticker description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the file extension served by the CDN.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.format.extension()
    }
}
