//! In-process auth session
//!
//! Holds the signed-in identity for the lifetime of the process. The
//! secret is only checked for presence and is never stored.

use super::traits::AuthSession;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("already signed in as {0}")]
    AlreadySignedIn(String),
    #[error("no active session")]
    NotSignedIn,
    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

/// An active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub identifier: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    fn start(identifier: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: identifier.to_string(),
            started_at: Utc::now(),
        }
    }
}

/// Session store that lives in memory only
#[derive(Debug, Default)]
pub struct LocalAuthSession {
    current: Option<Session>,
}

impl LocalAuthSession {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthSession for LocalAuthSession {
    fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    fn session(&self) -> Option<Session> {
        self.current.clone()
    }

    async fn login(&mut self, identifier: &str, _secret: &str) -> Result<()> {
        if let Some(session) = &self.current {
            return Err(AuthError::AlreadySignedIn(session.identifier.clone()).into());
        }
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::EmptyIdentifier.into());
        }

        let session = Session::start(identifier);
        tracing::info!(session_id = %session.id, "signed in");
        self.current = Some(session);
        Ok(())
    }

    async fn logout(&mut self) -> Result<()> {
        let session = self.current.take().ok_or(AuthError::NotSignedIn)?;
        tracing::info!(session_id = %session.id, "signed out");
        Ok(())
    }
}
