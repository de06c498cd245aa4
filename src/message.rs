// src/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // missing, null and blank are all rejected the same way
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The raw message, or `None` when it is absent or blank.
    pub fn non_blank_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub timestamp: DateTime<Utc>,
    pub message_id: String,
}

impl ChatResponse {
    /// Wraps a reply, stamping it with the current time and a fresh id.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            timestamp: Utc::now(),
            message_id: new_message_id(),
        }
    }
}

/// First 8 hex chars of a random v4 UUID.
pub fn new_message_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}
