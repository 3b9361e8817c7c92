use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ProfileRepository;
use crate::domain::{DomainError, Profile};

pub struct LoadProfileUseCase {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl LoadProfileUseCase {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    /// Load the profile, degrading to an empty profile on any failure.
    ///
    /// Never fails: a missing or unreadable profile is logged and treated as
    /// "nothing known about the user".
    pub async fn load(&self) -> Profile {
        match self.profile_repo.load().await {
            Ok(profile) => {
                debug!(
                    "Loaded user profile from {} ({} bytes)",
                    self.profile_repo.location(),
                    profile.as_str().len()
                );
                profile
            }
            Err(e) => {
                warn!(
                    "Error reading user profile from {}: {}",
                    self.profile_repo.location(),
                    e
                );
                Profile::empty()
            }
        }
    }

    /// Load the profile and surface read failures to the caller.
    pub async fn load_strict(&self) -> Result<Profile, DomainError> {
        self.profile_repo.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedProfile(Option<&'static str>);

    #[async_trait]
    impl ProfileRepository for FixedProfile {
        async fn load(&self) -> Result<Profile, DomainError> {
            self.0
                .map(Profile::new)
                .ok_or_else(|| DomainError::profile("unreadable"))
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    #[tokio::test]
    async fn load_returns_stored_profile() {
        let use_case = LoadProfileUseCase::new(Arc::new(FixedProfile(Some("Likes tea"))));
        assert_eq!(use_case.load().await.as_str(), "Likes tea");
    }

    #[tokio::test]
    async fn load_degrades_to_empty_on_failure() {
        let use_case = LoadProfileUseCase::new(Arc::new(FixedProfile(None)));
        assert!(use_case.load().await.is_empty());
    }

    #[tokio::test]
    async fn load_strict_surfaces_failure() {
        let use_case = LoadProfileUseCase::new(Arc::new(FixedProfile(None)));
        let err = use_case.load_strict().await.unwrap_err();
        assert!(err.is_profile_error());
    }

    #[tokio::test]
    async fn load_is_idempotent() {
        let use_case = LoadProfileUseCase::new(Arc::new(FixedProfile(Some("Budget $50"))));
        assert_eq!(use_case.load().await, use_case.load().await);
    }
}
