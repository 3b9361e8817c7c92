//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion provider (OpenRouter / OpenAI-compatible, or an offline mock)
//! - Profile storage (plain text file)
//! - Inbound HTTP server and the matching HTTP backend for front-ends
//! - Wiring (`api::Container`) and command routing

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
