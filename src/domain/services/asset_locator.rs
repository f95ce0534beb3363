//! Discord CDN URLs for guild assets.

use crate::domain::entities::{StickerFormat, emoji_extension};

/// Default Discord CDN host.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.discordapp.com";

/// Fixed query parameter appended to every asset URL.
pub const CACHE_BUST_QUERY: &str = "v=1";

/// Builds download URLs for emojis and stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocator {
    cdn_base: String,
}

impl AssetLocator {
    /// Creates a locator for the public Discord CDN.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cdn_base(DEFAULT_CDN_BASE)
    }

    /// Creates a locator for a custom CDN base URL.
    #[must_use]
    pub fn with_cdn_base(cdn_base: impl Into<String>) -> Self {
        let cdn_base = cdn_base.into().trim_end_matches('/').to_string();
        Self { cdn_base }
    }

    /// Returns the CDN base URL.
    #[must_use]
    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    /// Returns the URL of an emoji image.
    #[must_use]
    pub fn emoji_url(&self, emoji_id: &str, animated: bool) -> String {
        format!(
            "{}/emojis/{emoji_id}.{}?{CACHE_BUST_QUERY}",
            self.cdn_base,
            emoji_extension(animated)
        )
    }

    /// Returns the URL of a sticker file.
    #[must_use]
    pub fn sticker_url(&self, sticker_id: &str, format: StickerFormat) -> String {
        format!(
            "{}/stickers/{sticker_id}.{}?{CACHE_BUST_QUERY}",
            self.cdn_base,
            format.extension()
        )
    }
}

impl Default for AssetLocator {
    fn default() -> Self {
        Self::new()
    }
}
