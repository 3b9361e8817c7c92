use async_trait::async_trait;

use crate::domain::{DomainError, Profile, Turn};

/// What a chat front-end talks to: the profile endpoint and the relay.
///
/// Implemented in-process (calling the use cases directly) and over HTTP
/// (calling a running `giftchat serve`).
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn fetch_profile(&self) -> Result<Profile, DomainError>;

    /// Relay `history` and return the assistant's reply text.
    async fn reply(&self, history: &[Turn]) -> Result<String, DomainError>;
}
