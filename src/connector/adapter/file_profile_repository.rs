use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, Profile};

/// Default profile location, relative to the working directory.
pub const DEFAULT_PROFILE_PATH: &str = "data/user-profile.txt";

/// Reads the profile from a UTF-8 text file on every call. Never writes.
pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileProfileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE_PATH)
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn load(&self) -> Result<Profile, DomainError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(Profile::new(text))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_profile_verbatim() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("user-profile.txt");
        std::fs::write(&path, "Likes hiking, budget $50\n").expect("write");

        let repo = FileProfileRepository::new(&path);
        let profile = repo.load().await.expect("load");
        assert_eq!(profile.as_str(), "Likes hiking, budget $50\n");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let repo = FileProfileRepository::new(dir.path().join("absent.txt"));

        let err = repo.load().await.unwrap_err();
        assert!(matches!(err, DomainError::IoError(_)));
    }

    #[test]
    fn default_points_at_data_directory() {
        let repo = FileProfileRepository::default();
        assert_eq!(repo.path(), Path::new("data/user-profile.txt"));
    }
}
