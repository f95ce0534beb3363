mod asset_download_port;
mod guild_data_port;
mod token_storage_port;

pub use asset_download_port::AssetDownloadPort;
pub use guild_data_port::{ApiResponse, GuildDataPort, ResponseMeta};
pub use token_storage_port::TokenStoragePort;
