pub mod profile_controller;
pub mod prompt_controller;

pub use profile_controller::ProfileController;
pub use prompt_controller::PromptController;
