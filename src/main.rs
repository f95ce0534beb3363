use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use stashcord::application::{
    BoundedScheduler, HarvestSettings, HarvestUseCase, ResolveTokenUseCase,
};
use stashcord::domain::AssetLocator;
use stashcord::infrastructure::{
    AppConfig, CliArgs, DiscordClient, HttpAssetDownloader, KeyringTokenStorage, StorageManager,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_layer = match &config.log_path {
        Some(log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Some(log_path) = &config.log_path {
        info!(path = %log_path.display(), "Logging initialized");
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> AppConfig {
    let loaded =
        StorageManager::new().and_then(|storage| storage.load_config(args.config.as_deref()));

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stashcord: {e}; using default configuration");
            AppConfig::default()
        }
    };
    config.merge_with_args(args);
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let mut args = CliArgs::parse();
    let cli_token = args.token.take();

    let config = load_config(&args);
    init_logging(&config)?;
    config.validate()?;

    info!(version = stashcord::VERSION, "Starting {}", stashcord::NAME);

    let resolved = ResolveTokenUseCase::new(Arc::new(KeyringTokenStorage::new()))
        .execute(cli_token, config.save_token)
        .await?;
    info!(source = %resolved.source, "Token resolved");

    let client = Arc::new(DiscordClient::with_base_url(&config.endpoints.api_base_url)?);
    let downloader = Arc::new(HttpAssetDownloader::new()?);
    let scheduler = BoundedScheduler::new(config.concurrency);
    let settings = HarvestSettings::new(&config.output_dir)
        .with_locator(AssetLocator::with_cdn_base(&config.endpoints.cdn_base_url))
        .with_failure_policy(config.failure_policy);

    let harvest = HarvestUseCase::new(client, downloader, scheduler, settings);
    let report = harvest.execute(&resolved.token).await?;

    if report.guilds_listed == 0 {
        warn!("No guilds were listed for this token");
    }
    info!(%report, "Harvest finished");

    Ok(())
}
