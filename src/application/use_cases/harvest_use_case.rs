//! Guild emoji and sticker harvest.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::HarvestReport;
use crate::application::services::{BoundedScheduler, FailurePolicy, GuildFetcher, TaskGroup};
use crate::domain::entities::{
    AssetKind, AuthToken, DownloadOutcome, DownloadTask, GuildDetail, GuildId,
};
use crate::domain::errors::HarvestError;
use crate::domain::ports::{AssetDownloadPort, GuildDataPort};
use crate::domain::services::{AssetLocator, sanitize_name};

/// Settings for a harvest run.
#[derive(Debug, Clone)]
pub struct HarvestSettings {
    /// Root of the produced folder tree.
    pub output_root: PathBuf,
    /// CDN URL builder.
    pub locator: AssetLocator,
    /// Sibling handling when a task fails.
    pub failure_policy: FailurePolicy,
}

impl HarvestSettings {
    /// Creates settings with the public CDN and the default policy.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            locator: AssetLocator::new(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Sets the CDN URL builder.
    #[must_use]
    pub fn with_locator(mut self, locator: AssetLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

/// Downloads every custom emoji and sticker of every accessible guild.
#[derive(Clone)]
pub struct HarvestUseCase {
    fetcher: GuildFetcher,
    downloader: Arc<dyn AssetDownloadPort>,
    scheduler: BoundedScheduler,
    settings: HarvestSettings,
}

impl HarvestUseCase {
    /// Creates new harvest use case.
    ///
    /// `scheduler` gates both guild detail requests and downloads.
    #[must_use]
    pub fn new(
        guild_port: Arc<dyn GuildDataPort>,
        downloader: Arc<dyn AssetDownloadPort>,
        scheduler: BoundedScheduler,
        settings: HarvestSettings,
    ) -> Self {
        let fetcher = GuildFetcher::new(guild_port, scheduler.clone(), settings.failure_policy);
        Self {
            fetcher,
            downloader,
            scheduler,
            settings,
        }
    }

    /// Runs the harvest.
    ///
    /// A guild list that is not ok yields an empty report. Guilds whose
    /// detail request is not ok are skipped.
    ///
    /// # Errors
    /// Returns the first API or download failure.
    pub async fn execute(&self, token: &AuthToken) -> Result<HarvestReport, HarvestError> {
        let mut report = HarvestReport::default();

        let guilds_response = self.fetcher.list_guilds(token).await?;
        let status = guilds_response.status();
        let Some(guilds) = guilds_response.into_data() else {
            info!(status, "Guild list unavailable, nothing to do");
            return Ok(report);
        };

        let guild_ids: Vec<GuildId> = guilds.iter().map(|g| g.id().clone()).collect();
        report.guilds_listed = guild_ids.len();
        info!(
            count = guild_ids.len(),
            guild_ids = ?guild_ids.iter().map(GuildId::as_str).collect::<Vec<_>>(),
            "Found guilds"
        );

        let details = self.fetcher.fetch_details(token, &guild_ids).await?;

        let mut downloads = TaskGroup::new(self.settings.failure_policy);
        for (id, response) in guild_ids.iter().zip(details) {
            let status = response.status();
            match response.into_data() {
                Some(detail) => {
                    report.guilds_processed += 1;
                    self.submit_guild(&detail, &mut downloads);
                }
                None => {
                    report.guilds_skipped += 1;
                    warn!(guild_id = %id, status, "Guild detail unavailable, skipping");
                }
            }
        }

        debug!(tasks = downloads.len(), "Waiting for downloads");
        for outcome in downloads.join().await? {
            report.record(&outcome);
        }

        info!(%report, "Harvest complete");
        Ok(report)
    }

    /// Returns the download tasks for one guild, emojis first.
    #[must_use]
    pub fn plan_downloads(&self, detail: &GuildDetail) -> Vec<DownloadTask> {
        let guild_folder = self.settings.output_root.join(sanitize_name(detail.name()));
        let locator = &self.settings.locator;

        let emojis = detail.emojis().iter().map(|emoji| {
            DownloadTask::new(
                locator.emoji_url(emoji.id(), emoji.is_animated()),
                asset_folder(&guild_folder, AssetKind::Emoji),
                format!("{}.{}", sanitize_name(emoji.name()), emoji.extension()),
            )
        });

        let stickers = detail.stickers().iter().map(|sticker| {
            DownloadTask::new(
                locator.sticker_url(sticker.id(), sticker.format()),
                asset_folder(&guild_folder, AssetKind::Sticker),
                format!("{}.{}", sanitize_name(sticker.name()), sticker.extension()),
            )
        });

        emojis.chain(stickers).collect()
    }

    fn submit_guild(
        &self,
        detail: &GuildDetail,
        downloads: &mut TaskGroup<DownloadOutcome, HarvestError>,
    ) {
        info!(
            guild = %detail.name(),
            emojis = detail.emojis().len(),
            stickers = detail.stickers().len(),
            "Processing guild"
        );

        for task in self.plan_downloads(detail) {
            let downloader = self.downloader.clone();
            downloads.spawn(&self.scheduler, async move {
                downloader.download(&task).await.map_err(HarvestError::from)
            });
        }
    }
}

fn asset_folder(guild_folder: &Path, kind: AssetKind) -> PathBuf {
    guild_folder.join(kind.folder_name())
}
