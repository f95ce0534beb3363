//! Custom guild emoji entity.

use serde::{Deserialize, Serialize};

/// A custom emoji owned by a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    id: String,
    name: String,
    animated: bool,
}

impl Emoji {
    /// Creates a new emoji.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            animated,
        }
    }

    /// Returns the emoji ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the emoji name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the emoji is animated.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns the file extension served by the CDN.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        emoji_extension(self.animated)
    }
}

/// Returns the CDN file extension for an emoji.
#[must_use]
pub const fn emoji_extension(animated: bool) -> &'static str {
    if animated { "gif" } else { "png" }
}
