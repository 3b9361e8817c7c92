use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError};

/// Sends a full message list to a hosted chat-completion provider.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. The relay use case stays decoupled from any particular provider or
/// HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `messages` (system message first) and return the content of the
    /// first choice.
    ///
    /// `Ok(None)` means the provider answered but produced no reply content.
    /// Transport failures and provider-side errors are `Err`.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, DomainError>;

    /// Model identifier sent with every request, for logging.
    fn model(&self) -> &str;
}
