use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
}

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    /// CSS class prefix used on transcript entries (`user-message`, `ai-message`).
    pub fn css(&self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Assistant => "ai",
        }
    }

    pub fn avatar(&self) -> &'static str {
        match self {
            Author::User => "👤",
            Author::Assistant => "🎨",
        }
    }
}
