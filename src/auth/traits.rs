//! Trait abstraction for the auth session, injected wherever login state is needed

use super::session::Session;
use anyhow::Result;
use async_trait::async_trait;

/// Authentication state plus the login/logout operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// Whether a session is currently active
    fn is_logged_in(&self) -> bool;

    /// The active session, if any
    fn session(&self) -> Option<Session>;

    /// Sign in with an identifier (email) and secret (password)
    async fn login(&mut self, identifier: &str, secret: &str) -> Result<()>;

    /// End the active session
    async fn logout(&mut self) -> Result<()>;
}
