use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ProfileController, PromptController};

pub struct Router<'a> {
    profile_controller: ProfileController<'a>,
    prompt_controller: PromptController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            profile_controller: ProfileController::new(container),
            prompt_controller: PromptController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Profile => self.profile_controller.profile().await,
            Commands::Prompt => self.prompt_controller.prompt().await,
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
            Commands::Chat { .. } => unreachable!("Chat command is handled separately in main"),
        }
    }
}
