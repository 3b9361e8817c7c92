use serde::{Deserialize, Serialize};

use crate::domain::Turn;

/// Body of `POST /chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, oldest first.
    pub messages: Vec<Turn>,
}

/// Successful `POST /chat` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply text (markdown).
    pub message: String,
}

/// Successful `GET /user-profile` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
