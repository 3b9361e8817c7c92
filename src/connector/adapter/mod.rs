mod file_profile_repository;
pub mod http;
mod local_backend;
mod mock_chat_client;
mod openrouter_client;

pub use file_profile_repository::*;
pub use http::HttpBackend;
pub use local_backend::*;
pub use mock_chat_client::*;
pub use openrouter_client::*;
