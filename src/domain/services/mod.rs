//! Pure domain services.

mod asset_locator;
mod name_sanitizer;

pub use asset_locator::{AssetLocator, CACHE_BUST_QUERY, DEFAULT_CDN_BASE};
pub use name_sanitizer::sanitize_name;
