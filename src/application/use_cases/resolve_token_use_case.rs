//! Token resolution use case.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::{ResolvedToken, TokenSource};
use crate::domain::entities::AuthToken;
use crate::domain::errors::ConfigError;
use crate::domain::ports::TokenStoragePort;

/// Resolves authentication token from available sources.
pub struct ResolveTokenUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
}

impl ResolveTokenUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Resolves token from CLI/Env or keyring.
    ///
    /// Priority:
    /// 1. CLI/Env (passed as argument)
    /// 2. Keyring
    ///
    /// When `persist` is set, a token taken from the command line is written
    /// to the keyring; a storage failure is logged and ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingToken`] if no source yields a token.
    pub async fn execute(
        &self,
        cli_token: Option<String>,
        persist: bool,
    ) -> Result<ResolvedToken, ConfigError> {
        if let Some(token_str) = cli_token.filter(|s| !s.trim().is_empty()) {
            debug!("Checking command-line/env token");
            if let Some(token) = AuthToken::new(token_str) {
                info!(token = %token, "Using token from command line / environment");
                if persist {
                    self.persist(&token).await;
                }
                return Ok(ResolvedToken::new(token, TokenSource::CommandLine));
            }
            debug!("Command-line token has invalid format");
        }

        debug!("Checking keyring for stored token");
        match self.storage_port.get_token().await {
            Ok(Some(token)) => {
                info!(token = %token, "Using token from system keyring");
                return Ok(ResolvedToken::new(token, TokenSource::Keyring));
            }
            Ok(None) => {
                debug!("No token found in keyring");
            }
            Err(e) => {
                debug!(error = %e, "Failed to check keyring");
            }
        }

        debug!("No token found in any source");
        Err(ConfigError::MissingToken)
    }

    async fn persist(&self, token: &AuthToken) {
        match self.storage_port.store_token(token).await {
            Ok(()) => info!("Token persisted to secure storage"),
            Err(e) => error!(error = %e, "Failed to persist token to secure storage"),
        }
    }
}
