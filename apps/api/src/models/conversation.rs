use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single chat message. Every chat turn appends one `User` message followed
/// by one `Assistant` message. Clients may omit `timestamp`; it is assigned
/// at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered chat history, optionally tied to a profile. The profile reference
/// is weak: the referenced profile is not required to exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    pub profile_id: Option<Uuid>,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for conversation creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationInput {
    #[serde(default)]
    pub profile_id: Option<Uuid>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
