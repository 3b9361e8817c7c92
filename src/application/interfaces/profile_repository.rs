use async_trait::async_trait;

use crate::domain::{DomainError, Profile};

/// Read-only access to the stored user profile text.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Read the profile. Missing or unreadable storage is an error here;
    /// callers decide whether to degrade.
    async fn load(&self) -> Result<Profile, DomainError>;

    /// Human-readable location of the profile, for logging.
    fn location(&self) -> String;
}
