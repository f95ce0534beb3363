//! Domain entity definitions.

mod download;
mod emoji;
mod guild;
mod sticker;
mod token;

pub use download::{AssetKind, DownloadOutcome, DownloadTask};
pub use emoji::{Emoji, emoji_extension};
pub use guild::{Guild, GuildDetail, GuildId};
pub use sticker::{Sticker, StickerFormat};
pub use token::AuthToken;
