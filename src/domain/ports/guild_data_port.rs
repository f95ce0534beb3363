//! Guild data port for listing guilds and their assets.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Guild, GuildDetail, GuildId};
use crate::domain::errors::ApiError;

/// Transport-level status of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Whether the status was in the 2xx range.
    pub ok: bool,
    /// HTTP status code.
    pub status: u16,
}

/// Envelope around an API payload.
///
/// `data` is only populated when `meta.ok` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Status of the call.
    pub meta: ResponseMeta,
    /// Decoded payload for successful calls.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying data.
    #[must_use]
    pub const fn ok(status: u16, data: T) -> Self {
        Self {
            meta: ResponseMeta { ok: true, status },
            data: Some(data),
        }
    }

    /// Creates a successful response whose body carried no payload.
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self {
            meta: ResponseMeta { ok: true, status },
            data: None,
        }
    }

    /// Creates a failed response without data.
    #[must_use]
    pub const fn not_ok(status: u16) -> Self {
        Self {
            meta: ResponseMeta { ok: false, status },
            data: None,
        }
    }

    /// Returns true if the call succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.meta.ok
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.meta.status
    }

    /// Returns the payload of a successful call, or `None`.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.meta.ok { self.data } else { None }
    }
}

/// Port for fetching the current user's guilds and their custom assets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildDataPort: Send + Sync {
    /// Lists the guilds the user is a member of.
    ///
    /// Entries without an ID are dropped by the adapter.
    async fn fetch_guilds(&self, token: &AuthToken) -> Result<ApiResponse<Vec<Guild>>, ApiError>;

    /// Fetches a guild with its emojis and stickers.
    async fn fetch_guild_detail(
        &self,
        token: &AuthToken,
        guild_id: &GuildId,
    ) -> Result<ApiResponse<GuildDetail>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ok_has_no_data() {
        let response: ApiResponse<Vec<Guild>> = ApiResponse::not_ok(401);
        assert!(!response.is_ok());
        assert_eq!(response.status(), 401);
        assert!(response.into_data().is_none());
    }

    #[test]
    fn test_into_data_ignores_payload_of_failed_call() {
        let response = ApiResponse {
            meta: ResponseMeta {
                ok: false,
                status: 500,
            },
            data: Some(vec![Guild::new("1", "x")]),
        };
        assert!(response.into_data().is_none());
    }

    #[test]
    fn test_empty_is_ok_without_data() {
        let response: ApiResponse<Vec<Guild>> = ApiResponse::empty(200);
        assert!(response.is_ok());
        assert!(response.into_data().is_none());
    }
}
