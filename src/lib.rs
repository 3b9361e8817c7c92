pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AssistantBackend, ChatClient, ChatSession, CompletionRelayUseCase, LoadProfileUseCase,
    PendingReply, ProfileRepository, Rejection, SessionState,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, FileProfileRepository, HttpBackend, LocalBackend, MockChatClient,
    OpenRouterClient,
};

pub use domain::{
    build_system_prompt, ChatMessage, Conversation, DomainError, MessageRole, Profile,
    PromptLocale, Role, Turn,
};
