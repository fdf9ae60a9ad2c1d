//! Conversation types and transcript state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Sequential id, starting at 1 for the greeting
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Creation time. Display order is insertion order, not this.
    pub timestamp: DateTime<Utc>,
}

/// Append-only, ordered list of messages for one widget session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript seeded with the assistant's greeting
    pub fn with_greeting(greeting: &str) -> Self {
        let mut transcript = Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
        };
        transcript.push(Sender::Assistant, greeting);
        transcript
    }

    pub fn add_user(&mut self, text: &str) -> u64 {
        self.push(Sender::User, text)
    }

    pub fn add_assistant(&mut self, text: &str) -> u64 {
        self.push(Sender::Assistant, text)
    }

    // Messages are never removed, so length + 1 stays unique.
    fn push(&mut self, sender: Sender, text: &str) -> u64 {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            sender,
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
