use serde::{Deserialize, Serialize};

use crate::constants::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    AI,
}

impl Sender {
    /// Label used in transcripts and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::AI => "AI",
        }
    }
}

/// Represents a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Message {
            sender: Sender::AI,
            content: content.into(),
        }
    }

    /// The assistant greeting that opens every fresh pane.
    pub fn greeting() -> Self {
        Message::ai(GREETING)
    }
}
