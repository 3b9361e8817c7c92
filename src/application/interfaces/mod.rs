mod assistant_backend;
mod chat_client;
mod profile_repository;

pub use assistant_backend::*;
pub use chat_client::*;
pub use profile_repository::*;
