//! Default outbound messaging adapter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::infrastructure::ports::{MessageSender, MessagingError, RandomPort};

/// Logs each message instead of delivering it. Stands in for a chat
/// transport when none is wired up.
pub struct LogMessageSender {
    random: Arc<dyn RandomPort>,
}

impl LogMessageSender {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }
}

#[async_trait]
impl MessageSender for LogMessageSender {
    async fn send(&self, from: &str, to: &str, text: &str) -> Result<String, MessagingError> {
        let message_id = self.random.gen_uuid().to_string();
        tracing::info!(
            message_id = %message_id,
            from = %from,
            to = %to,
            chars = text.chars().count(),
            "Outbound message"
        );
        tracing::debug!(message_id = %message_id, text = %text, "Outbound message body");
        Ok(message_id)
    }
}
