use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Profile error: {0}")]
    ProfileError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn profile(msg: impl Into<String>) -> Self {
        Self::ProfileError(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::ProviderError(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_profile_error(&self) -> bool {
        matches!(self, Self::ProfileError(_) | Self::IoError(_))
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::ProviderError(_) | Self::TransportError(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
