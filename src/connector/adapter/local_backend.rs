use async_trait::async_trait;

use crate::application::{AssistantBackend, CompletionRelayUseCase, LoadProfileUseCase};
use crate::domain::{DomainError, Profile, Turn};

/// [`AssistantBackend`] that runs the use cases in this process.
pub struct LocalBackend {
    profile: LoadProfileUseCase,
    relay: CompletionRelayUseCase,
}

impl LocalBackend {
    pub fn new(profile: LoadProfileUseCase, relay: CompletionRelayUseCase) -> Self {
        Self { profile, relay }
    }
}

#[async_trait]
impl AssistantBackend for LocalBackend {
    async fn fetch_profile(&self) -> Result<Profile, DomainError> {
        self.profile.load_strict().await
    }

    async fn reply(&self, history: &[Turn]) -> Result<String, DomainError> {
        self.relay.execute(history).await
    }
}
