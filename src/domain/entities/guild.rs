//! Discord guild entities.

use serde::{Deserialize, Serialize};

use super::emoji::Emoji;
use super::sticker::Sticker;

/// Unique identifier for a Discord guild (server).
///
/// Treated as an opaque string; it is only ever echoed back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildId(String);

impl GuildId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GuildId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GuildId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Discord guild (server) summary as listed for the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guild {
    id: GuildId,
    name: String,
}

impl Guild {
    /// Creates a new guild with the given ID and name.
    #[must_use]
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns the guild ID.
    #[must_use]
    pub const fn id(&self) -> &GuildId {
        &self.id
    }

    /// Returns the guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Full guild record including its custom assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildDetail {
    guild: Guild,
    emojis: Vec<Emoji>,
    stickers: Vec<Sticker>,
}

impl GuildDetail {
    /// Creates a detail record for a guild with no assets.
    #[must_use]
    pub const fn new(guild: Guild) -> Self {
        Self {
            guild,
            emojis: Vec::new(),
            stickers: Vec::new(),
        }
    }

    /// Sets the guild emojis.
    #[must_use]
    pub fn with_emojis(mut self, emojis: Vec<Emoji>) -> Self {
        self.emojis = emojis;
        self
    }

    /// Sets the guild stickers.
    #[must_use]
    pub fn with_stickers(mut self, stickers: Vec<Sticker>) -> Self {
        self.stickers = stickers;
        self
    }

    /// Returns the guild summary.
    #[must_use]
    pub const fn guild(&self) -> &Guild {
        &self.guild
    }

    /// Returns the guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.guild.name()
    }

    /// Returns the custom emojis.
    #[must_use]
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    /// Returns the custom stickers.
    #[must_use]
    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    /// Returns the number of downloadable assets.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.emojis.len() + self.stickers.len()
    }
}
