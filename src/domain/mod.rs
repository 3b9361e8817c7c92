//! # Domain Layer
//!
//! Conversation model, prompt composition, and the error type shared by
//! every layer. Nothing here performs I/O.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
