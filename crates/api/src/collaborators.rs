//! Host collaborator seams, injected instead of referenced as ambient
//! globals.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Translation hook for user-facing message strings.
pub trait Translator: Send + Sync {
    fn tr(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pass-through translator used when the host supplies none.
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {}

/// Transient desk notification payload.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub indicator: String,
}

#[derive(Error, Debug)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Realtime notification transport owned by the host.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(
        &self,
        event: &str,
        note: &Notification,
        user: &str,
    ) -> Result<(), NotifyError>;
}

/// Fallback notifier: logs instead of delivering.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(
        &self,
        event: &str,
        note: &Notification,
        user: &str,
    ) -> Result<(), NotifyError> {
        info!(event, user, title = %note.title, "notification published");
        Ok(())
    }
}

/// The user on whose behalf the current request runs.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user: String,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            user: "Administrator".to_string(),
        }
    }
}
