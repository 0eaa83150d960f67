//! External service ports.

use async_trait::async_trait;

use super::error::MessagingError;

/// Outbound chat transport.
///
/// Returns the transport's message id. Never called while the game store
/// lock is held.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, from: &str, to: &str, text: &str) -> Result<String, MessagingError>;
}
