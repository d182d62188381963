// src/application/ports/security.rs
use crate::application::{dto::AuthenticatedUser, ApplicationResult};
use async_trait::async_trait;

/// Verification half of the authentication collaborator. Token issuance
/// (login, registration, sessions) happens outside this service; all we do
/// here is resolve a bearer token to a principal.
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
