//! Error types for port operations.

/// Persistence adapter failures.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Reading or writing the snapshot failed - includes the operation for tracing.
    #[error("I/O error during {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PersistenceError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessagingError {
    #[error("Send failed to {to}: {message}")]
    SendFailed { to: String, message: String },
}
