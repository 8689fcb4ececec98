//! Per-session conversation history.
//!
//! Each session owns an ordered turn sequence seeded with one system turn
//! (the persona). Sessions are keyed by the originating user id and live
//! behind a single lock; the only destruction path is the reset command.

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::Mutex;

/// Session key used when the platform does not identify the sender.
pub const ANONYMOUS_SESSION: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One entry in a conversation. Serializes straight into the completion
/// request's `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    pub fn new(persona: &str) -> Self {
        Self {
            turns: vec![ChatTurn::system(persona)],
        }
    }

    /// Clear all turns and reseed the system turn.
    pub fn reset(&mut self, persona: &str) {
        self.turns.clear();
        self.turns.push(ChatTurn::system(persona));
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}

/// Conversation history per session key.
///
/// The lock is held only for mutation and snapshotting, never across the
/// completion call. Two concurrent requests for the same session can therefore
/// interleave between the user turn and the assistant turn.
pub struct ConversationStore {
    persona: String,
    sessions: Mutex<HashMap<String, Conversation>>,
}

impl ConversationStore {
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Clear the session back to its seeded state.
    pub async fn reset(&self, key: &str) {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(key.to_string())
            .and_modify(|c| c.reset(&self.persona))
            .or_insert_with(|| Conversation::new(&self.persona));
    }

    /// Append a user turn, seeding the session if needed, and return the full
    /// turn sequence to hand to the completion service.
    pub async fn push_user(&self, key: &str, text: &str) -> Vec<ChatTurn> {
        let mut sessions = self.sessions.lock().await;
        let conversation = sessions
            .entry(key.to_string())
            .or_insert_with(|| Conversation::new(&self.persona));
        conversation.push(ChatTurn::user(text));
        conversation.turns().to_vec()
    }

    pub async fn push_assistant(&self, key: &str, text: &str) {
        let mut sessions = self.sessions.lock().await;
        let conversation = sessions
            .entry(key.to_string())
            .or_insert_with(|| Conversation::new(&self.persona));
        conversation.push(ChatTurn::assistant(text));
    }

    pub async fn snapshot(&self, key: &str) -> Option<Vec<ChatTurn>> {
        let sessions = self.sessions.lock().await;
        sessions.get(key).map(|c| c.turns().to_vec())
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
