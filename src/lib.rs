//! Stashcord - bulk downloader for Discord guild emojis and stickers.
//!
//! Lists the guilds a token belongs to, fetches each guild's emoji and
//! sticker catalogue and mirrors the assets into a local folder tree, with
//! every request passing through one bounded scheduler.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "stashcord";
