mod client;
pub mod dto;
mod server;

pub use client::HttpBackend;
pub use dto::*;
pub use server::{app, serve};
