//! Discord API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, GuildDetailResponse, GuildSummaryResponse};
use crate::domain::entities::{AuthToken, Guild, GuildDetail, GuildId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{ApiResponse, GuildDataPort};

/// Default Discord REST API base URL.
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v9";
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/112.0";

/// Discord REST client for guild data.
pub struct DiscordClient {
    client: Client,
    base_url: String,
}

impl DiscordClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DISCORD_API_BASE)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues an authenticated GET and decodes the body of a successful reply.
    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AuthToken,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, token.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, path, "Failed to connect to Discord API");
                if e.is_connect() {
                    ApiError::network(path, "failed to connect to Discord")
                } else {
                    ApiError::network(path, e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(error) => error.message,
                Err(_) => format!("HTTP {status}"),
            };
            debug!(path, status = status.as_u16(), %message, "Discord API returned non-success");
            return Ok(ApiResponse::not_ok(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(path, format!("failed to read body: {e}")))?;

        let data = serde_json::from_slice::<T>(&body).map_err(|e| {
            warn!(error = %e, path, "Failed to parse Discord API response");
            ApiError::malformed(path, e.to_string())
        })?;

        Ok(ApiResponse::ok(status.as_u16(), data))
    }
}

#[async_trait]
impl GuildDataPort for DiscordClient {
    async fn fetch_guilds(&self, token: &AuthToken) -> Result<ApiResponse<Vec<Guild>>, ApiError> {
        let response = self
            .get_json::<serde_json::Value>(token, "/users/@me/guilds")
            .await?;
        let status = response.status();

        let Some(body) = response.into_data() else {
            return Ok(ApiResponse::not_ok(status));
        };

        let entries = match body {
            serde_json::Value::Null => {
                debug!("Guild list body is null");
                return Ok(ApiResponse::empty(status));
            }
            serde_json::Value::Array(entries) => entries,
            other => {
                debug!(kind = json_kind(&other), "Guild list body is not an array, ignoring it");
                Vec::new()
            }
        };

        let total = entries.len();
        let guilds: Vec<Guild> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<GuildSummaryResponse>(entry).ok())
            .filter_map(GuildSummaryResponse::into_guild)
            .collect();

        if guilds.len() < total {
            debug!(
                dropped = total - guilds.len(),
                "Ignoring guild entries without an ID"
            );
        }

        Ok(ApiResponse::ok(status, guilds))
    }

    async fn fetch_guild_detail(
        &self,
        token: &AuthToken,
        guild_id: &GuildId,
    ) -> Result<ApiResponse<GuildDetail>, ApiError> {
        let path = format!("/guilds/{guild_id}");
        let response = self
            .get_json::<Option<GuildDetailResponse>>(token, &path)
            .await?;
        let status = response.status();

        Ok(match response.into_data() {
            Some(Some(detail)) => ApiResponse::ok(status, detail.into_detail()),
            Some(None) => {
                debug!(%guild_id, "Guild detail body is null");
                ApiResponse::empty(status)
            }
            None => ApiResponse::not_ok(status),
        })
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
