//! Session storage traits and types for conversation state.

use async_trait::async_trait;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Classification tag attached to assistant messages; drives icon and accent
/// selection in rendering layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Health,
    Finance,
    Study,
    General,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Health => "health",
            Topic::Finance => "finance",
            Topic::Study => "study",
            Topic::General => "general",
        }
    }
}

/// A single message in a conversation. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub category: Option<Topic>,
}

impl Message {
    /// Build a user message with a fresh id and the current timestamp.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            created_at: Utc::now(),
            category: None,
        }
    }

    /// Build an assistant message tagged with the topic it answers.
    pub fn assistant(content: impl Into<String>, category: Topic) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            category: Some(category),
        }
    }
}

/// Append-only storage for one conversation's message log.
///
/// There is no deletion or editing; the log lives in memory for the lifetime
/// of the session and is discarded with it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Append a message to the end of the log. Returns `false` without
    /// appending once the session has been closed.
    async fn append(&self, message: Message) -> Result<bool>;

    /// Snapshot copy of the full ordered log, safe to iterate while appends
    /// continue.
    async fn all(&self) -> Result<Vec<Message>>;

    /// Snapshot of the most recent messages, optionally limited.
    async fn recent(&self, limit: Option<usize>) -> Result<Vec<Message>>;

    /// Number of messages appended so far.
    async fn message_count(&self) -> Result<usize>;

    /// Mark the session ended. Later appends are dropped. Idempotent.
    async fn close(&self) -> Result<()>;

    /// Whether the session has been closed.
    fn is_closed(&self) -> bool;

    /// The name of this session store implementation.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn topic_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Topic::Health).unwrap(), "\"health\"");
        assert_eq!(Topic::Finance.as_str(), "finance");
    }

    #[test]
    fn message_serialization_round_trip() {
        let msg = Message::assistant("hello", Topic::General);
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, msg.id);
        assert_eq!(back.role, Role::Assistant);
        assert_eq!(back.category, Some(Topic::General));
    }

    #[test]
    fn user_message_has_no_category() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert!(msg.category.is_none());
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn fresh_messages_get_distinct_ids() {
        let a = Message::user("one");
        let b = Message::user("two");
        assert_ne!(a.id, b.id);
    }
}
