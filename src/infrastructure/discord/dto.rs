use serde::Deserialize;

use crate::domain::entities::{Emoji, Guild, GuildDetail, Sticker, StickerFormat};

/// Entry of `GET /users/@me/guilds`.
#[derive(Debug, Deserialize)]
pub struct GuildSummaryResponse {
    /// Guild ID; entries without one are ignored.
    pub id: Option<String>,
    /// Guild name.
    pub name: Option<String>,
}

impl GuildSummaryResponse {
    /// Converts to a domain guild, or `None` when the ID is missing or blank.
    pub fn into_guild(self) -> Option<Guild> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(Guild::new(id, self.name.unwrap_or_default()))
    }
}

/// Discord API guild response structure (`GET /guilds/{id}`).
#[derive(Debug, Deserialize)]
pub struct GuildDetailResponse {
    /// Guild ID.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Custom emojis.
    #[serde(default)]
    pub emojis: Vec<EmojiResponse>,
    /// Custom stickers.
    #[serde(default)]
    pub stickers: Vec<StickerResponse>,
}

/// Discord API emoji structure.
#[derive(Debug, Deserialize)]
pub struct EmojiResponse {
    /// Emoji ID, null for built-in emojis.
    pub id: Option<String>,
    /// Emoji name.
    pub name: Option<String>,
    /// Whether the emoji is animated.
    #[serde(default)]
    pub animated: bool,
}

/// Discord API sticker structure.
#[derive(Debug, Deserialize)]
pub struct StickerResponse {
    /// Sticker ID.
    pub id: String,
    /// Sticker name.
    pub name: String,
    /// Sticker type (1 = standard, 2 = guild).
    #[serde(rename = "type")]
    pub kind: Option<u8>,
    /// Sticker format type.
    pub format_type: u8,
    /// Autocomplete tags.
    pub tags: Option<String>,
    /// Sticker description.
    pub description: Option<String>,
}

impl GuildDetailResponse {
    /// Converts to a domain guild detail, dropping emojis without an ID.
    pub fn into_detail(self) -> GuildDetail {
        let emojis = self
            .emojis
            .into_iter()
            .filter_map(|emoji| {
                let id = emoji.id?;
                Some(Emoji::new(id, emoji.name.unwrap_or_default(), emoji.animated))
            })
            .collect();

        let stickers = self
            .stickers
            .into_iter()
            .map(|sticker| {
                Sticker::new(
                    sticker.id,
                    sticker.name,
                    StickerFormat::from(sticker.format_type),
                )
                .with_kind(sticker.kind)
                .with_tags(sticker.tags)
                .with_description(sticker.description)
            })
            .collect();

        GuildDetail::new(Guild::new(self.id, self.name))
            .with_emojis(emojis)
            .with_stickers(stickers)
    }
}

/// Discord API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from Discord.
    pub message: String,
    /// Discord JSON error code.
    #[serde(default)]
    pub code: Option<u32>,
}
