pub mod prompt_builder;

pub use prompt_builder::{behavioral_policy, build_system_prompt};
