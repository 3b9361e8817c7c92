use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatMessage, DomainError, MessageRole};

const OPENING: &str = "Hi! Let's find the perfect gift. Who is the gift for, and what is the occasion?";
const FOLLOW_UP: &str = "Thanks! Are there any specific requirements I should keep in mind?";
const SUGGESTIONS: &str = "\
Here are three ideas:
1. **A personalised notebook**: practical and easy to tailor to their interests.
2. **A local experience voucher**: a memorable outing instead of another object.
3. **A quality thermos**: useful every day and fits most budgets.";

/// Offline [`ChatClient`] with deterministic canned replies.
///
/// Mirrors the expected dialogue shape: an opening question, one follow-up,
/// then three suggestions. Useful for running the server and the terminal
/// front-end without provider credentials.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }

    fn reply_for(messages: &[ChatMessage]) -> &'static str {
        let user_turns = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();
        let has_assistant = messages.iter().any(|m| m.role == MessageRole::Assistant);

        match (has_assistant, user_turns) {
            (false, _) => OPENING,
            (true, 0..=1) => FOLLOW_UP,
            (true, _) => SUGGESTIONS,
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError> {
        if messages.is_empty() {
            return Err(DomainError::invalid_input("no messages to complete"));
        }
        let reply = Self::reply_for(messages);
        debug!("MockChatClient replying to {} messages", messages.len());
        Ok(Some(reply.to_string()))
    }

    fn model(&self) -> &str {
        "mock"
    }
}
