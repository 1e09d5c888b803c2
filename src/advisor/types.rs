use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Non-streaming chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: DecodingOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DecodingOptions {
    pub top_p: f64,
    pub temperature: f64,
}

/// Reply envelope. The endpoint may omit the message object entirely; that
/// degrades to an empty reply rather than a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

impl ChatResponse {
    pub fn text(self) -> String {
        self.message.map(|m| m.content).unwrap_or_default()
    }
}
