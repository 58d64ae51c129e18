use serde::{Deserialize, Serialize};

/// Request to ask the bot a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Blank or whitespace-only messages are not dispatched
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }
}
