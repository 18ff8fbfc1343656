use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single message in the assistant conversation.
/// Lives only as long as the assistant view; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp,
        }
    }

    pub fn assistant(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp,
        }
    }

    /// `HH:MM` in UTC, for the bubble footer
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

pub const GREETING: &str = "Hello! I'm your HiBells Assistant. I can help you with course information, \
campus navigation, academic schedules, and more. How can I assist you today?";
