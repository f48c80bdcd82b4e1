use crate::modules::portfolio::adapters::outbound::assistant::{Assistant, AssistantError};
use crate::modules::portfolio::core::chat::ChatMessage;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};

/// Replays queued answers in order and remembers every transcript it was shown.
/// Once the queue is empty it echoes the last user message.
#[derive(Default)]
pub struct ScriptedAssistant {
    script: Mutex<VecDeque<Result<String, AssistantError>>>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
    delay_ms: u64,
}

impl ScriptedAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(replies: impl IntoIterator<Item = Result<String, AssistantError>>) -> Self {
        Self {
            script: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub async fn seen(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Assistant for ScriptedAssistant {
    async fn reply(&self, transcript: &[ChatMessage]) -> Result<String, AssistantError> {
        self.seen.lock().await.push(transcript.to_vec());
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(next) = self.script.lock().await.pop_front() {
            return next;
        }
        transcript
            .last()
            .map(|m| format!("echo: {}", m.content))
            .ok_or(AssistantError::EmptyReply)
    }
}
