//! Chat DTOs

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}
