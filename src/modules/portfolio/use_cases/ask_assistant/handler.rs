use crate::modules::portfolio::adapters::outbound::assistant::Assistant;
use crate::modules::portfolio::core::chat::{ChatMessage, ChatTranscript};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the assistant right now. Please try again in a moment.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("still waiting for the previous reply")]
    Busy,
}

/// Owns the site's chat transcript. One exchange at a time keeps user and
/// assistant turns strictly alternating.
pub struct AskAssistantHandler<TAssistant>
where
    TAssistant: Assistant + ?Sized,
{
    assistant: Arc<TAssistant>,
    transcript: Mutex<ChatTranscript>,
}

impl<TAssistant> AskAssistantHandler<TAssistant>
where
    TAssistant: Assistant + ?Sized,
{
    pub fn new(assistant: Arc<TAssistant>) -> Self {
        Self {
            assistant,
            transcript: Mutex::new(ChatTranscript::new()),
        }
    }

    pub async fn transcript(&self) -> ChatTranscript {
        self.transcript.lock().await.clone()
    }

    /// Appends the user's message, asks the assistant, appends its reply. An assistant
    /// failure still produces a reply turn, the fallback text.
    pub async fn handle(&self, message: &str) -> Result<ChatMessage, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let mut transcript = self.transcript.try_lock().map_err(|_| ChatError::Busy)?;

        transcript.push(ChatMessage::user(message));
        let content = match self.assistant.reply(transcript.messages()).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(%error, "assistant call failed");
                FALLBACK_REPLY.to_string()
            }
        };
        let reply = ChatMessage::assistant(content);
        transcript.push(reply.clone());
        Ok(reply)
    }
}
