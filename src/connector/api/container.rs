use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, CompletionRelayUseCase, LoadProfileUseCase, ProfileRepository};
use crate::connector::adapter::{
    FileProfileRepository, LocalBackend, MockChatClient, OpenRouterClient, DEFAULT_PROFILE_PATH,
};
use crate::domain::PromptLocale;

pub struct ContainerConfig {
    /// Profile text file, read on every relay call.
    pub profile_path: PathBuf,
    pub locale: PromptLocale,
    /// Use the offline canned-reply client instead of the provider.
    pub mock_llm: bool,
    /// Overrides `OPENROUTER_MODEL` when set.
    pub model: Option<String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            locale: PromptLocale::default(),
            mock_llm: false,
            model: None,
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    profile_repo: Arc<dyn ProfileRepository>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let mut client = OpenRouterClient::from_env();
            if let Some(model) = config.model.as_deref() {
                client = client.with_model(model);
            }
            debug!("Using completion endpoint {} with model {}", client.url(), client.model());
            Arc::new(client)
        };

        Self::with_chat_client(config, chat_client)
    }

    /// Wire the container around an explicit chat client.
    pub fn with_chat_client(config: ContainerConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        let profile_repo = Arc::new(FileProfileRepository::new(&config.profile_path));
        Self {
            chat_client,
            profile_repo,
            config,
        }
    }

    pub fn profile_use_case(&self) -> LoadProfileUseCase {
        LoadProfileUseCase::new(self.profile_repo.clone())
    }

    pub fn relay_use_case(&self) -> CompletionRelayUseCase {
        CompletionRelayUseCase::new(
            self.profile_use_case(),
            self.chat_client.clone(),
            self.config.locale,
        )
    }

    pub fn local_backend(&self) -> LocalBackend {
        LocalBackend::new(self.profile_use_case(), self.relay_use_case())
    }

    pub fn locale(&self) -> PromptLocale {
        self.config.locale
    }

    pub fn model(&self) -> &str {
        self.chat_client.model()
    }

    pub fn profile_path(&self) -> &Path {
        &self.config.profile_path
    }
}
