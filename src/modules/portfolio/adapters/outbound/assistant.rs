use crate::modules::portfolio::core::chat::ChatMessage;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("assistant is not configured")]
    NotConfigured,

    #[error("assistant request failed: {0}")]
    Request(String),

    #[error("assistant returned no reply")]
    EmptyReply,
}

/// External language model that answers questions about the portfolio.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// `transcript` ends with the user's latest message.
    async fn reply(&self, transcript: &[ChatMessage]) -> Result<String, AssistantError>;
}
