use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::{ChatClient, LoadProfileUseCase};
use crate::domain::{build_system_prompt, ChatMessage, DomainError, PromptLocale, Turn};

/// Build the provider message list: the system prompt followed by `history`
/// in its original order.
pub fn outbound_messages(system_prompt: &str, history: &[Turn]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.iter().map(ChatMessage::from));
    messages
}

/// Relays a conversation to the completion provider.
///
/// The profile is re-read on every call, so edits to the profile file take
/// effect on the next message. There are no retries and no timeout beyond the
/// transport's own.
pub struct CompletionRelayUseCase {
    profile: LoadProfileUseCase,
    chat_client: Arc<dyn ChatClient>,
    locale: PromptLocale,
}

impl CompletionRelayUseCase {
    pub fn new(
        profile: LoadProfileUseCase,
        chat_client: Arc<dyn ChatClient>,
        locale: PromptLocale,
    ) -> Self {
        Self {
            profile,
            chat_client,
            locale,
        }
    }

    /// System prompt for the profile as it is stored right now.
    pub async fn system_prompt(&self) -> String {
        let profile = self.profile.load().await;
        build_system_prompt(&profile, self.locale)
    }

    /// Relay `history` and return the reply text.
    ///
    /// A reply without content is replaced with the locale's fallback text.
    /// Provider and transport failures are logged and returned as errors.
    pub async fn execute(&self, history: &[Turn]) -> Result<String, DomainError> {
        let system_prompt = self.system_prompt().await;
        let messages = outbound_messages(&system_prompt, history);

        info!(
            "Relaying {} turns to {}",
            history.len(),
            self.chat_client.model()
        );

        match self.chat_client.complete(&messages).await {
            Ok(Some(content)) if !content.is_empty() => Ok(content),
            Ok(_) => {
                debug!("Provider returned no reply content, using fallback");
                Ok(self.locale.fallback_reply().to_string())
            }
            Err(e) => {
                error!("Error calling completion provider: {}", e);
                Err(e)
            }
        }
    }
}
