use anyhow::Result;

use super::super::Container;

pub struct ProfileController<'a> {
    container: &'a Container,
}

impl<'a> ProfileController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn profile(&self) -> Result<String> {
        let use_case = self.container.profile_use_case();
        let profile = use_case.load_strict().await?;

        if profile.is_empty() {
            return Ok(format!(
                "Profile at {} is empty.",
                self.container.profile_path().display()
            ));
        }
        Ok(profile.into_inner())
    }
}
