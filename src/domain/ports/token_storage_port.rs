//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::SecretError;

/// Port for token persistence operations.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self) -> Result<Option<AuthToken>, SecretError>;

    /// Stores token securely.
    async fn store_token(&self, token: &AuthToken) -> Result<(), SecretError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, SecretError> {
        Ok(self.get_token().await?.is_some())
    }
}
