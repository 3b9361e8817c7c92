use anyhow::Result;

use super::super::Container;

pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// The system prompt the next relay call would send.
    pub async fn prompt(&self) -> Result<String> {
        let use_case = self.container.relay_use_case();
        Ok(use_case.system_prompt().await)
    }
}
