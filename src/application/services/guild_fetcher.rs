//! Guild listing and bounded detail fetching.

use std::sync::Arc;

use tracing::debug;

use super::task_scheduler::{BoundedScheduler, FailurePolicy, TaskGroup};
use crate::domain::entities::{AuthToken, Guild, GuildDetail, GuildId};
use crate::domain::errors::{ApiError, HarvestError};
use crate::domain::ports::{ApiResponse, GuildDataPort};

/// Fetches guilds through a [`GuildDataPort`], gating detail requests.
#[derive(Clone)]
pub struct GuildFetcher {
    port: Arc<dyn GuildDataPort>,
    scheduler: BoundedScheduler,
    policy: FailurePolicy,
}

impl GuildFetcher {
    /// Creates a new fetcher.
    #[must_use]
    pub fn new(
        port: Arc<dyn GuildDataPort>,
        scheduler: BoundedScheduler,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            port,
            scheduler,
            policy,
        }
    }

    /// Lists the guilds accessible with `token`.
    ///
    /// # Errors
    /// Returns error on transport failure or a malformed payload.
    pub async fn list_guilds(&self, token: &AuthToken) -> Result<ApiResponse<Vec<Guild>>, ApiError> {
        debug!("Listing guilds");
        self.port.fetch_guilds(token).await
    }

    /// Fetches the detail of every guild in `ids`, at most `capacity` at a time.
    ///
    /// Responses are returned in the order of `ids`, envelopes untouched.
    ///
    /// # Errors
    /// Returns the first fetch error; remaining fetches are handled by the
    /// configured failure policy.
    pub async fn fetch_details(
        &self,
        token: &AuthToken,
        ids: &[GuildId],
    ) -> Result<Vec<ApiResponse<GuildDetail>>, HarvestError> {
        let mut group = TaskGroup::new(self.policy);

        for id in ids {
            let port = self.port.clone();
            let token = token.clone();
            let id = id.clone();
            group.spawn(&self.scheduler, async move {
                debug!(guild_id = %id, "Fetching guild detail");
                port.fetch_guild_detail(&token, &id)
                    .await
                    .map_err(HarvestError::from)
            });
        }

        group.join().await
    }
}
