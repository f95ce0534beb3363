//! Asset download adapters.

mod http_downloader;

pub use http_downloader::HttpAssetDownloader;
