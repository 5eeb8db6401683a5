//! Response selection traits and types.

use serde::{Deserialize, Serialize};

use crate::session::Topic;

/// A static canned-response template.
///
/// A template matches when any of its keywords is a substring of the
/// lowercased input. Table ordering decides priority; first match wins.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub category: Topic,
    pub keywords: &'static [&'static str],
    pub body: &'static str,
}

impl Template {
    /// Test this template against already-lowercased text.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// A selected reply, not yet wrapped in a session message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub category: Topic,
    pub body: String,
}

/// Maps a user utterance to exactly one canned reply.
///
/// Implementations are pure: no side effects, no randomness, the same text
/// always selects the same reply. Callers must reject empty or
/// whitespace-only input before invoking `select`.
pub trait ResponseSelector: Send + Sync {
    fn select(&self, text: &str) -> Reply;
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_matches_any_keyword() {
        let template = Template {
            category: Topic::Health,
            keywords: &["sleep", "tired"],
            body: "rest up",
        };
        assert!(template.matches("so tired today"));
        assert!(template.matches("how do i sleep better"));
        assert!(!template.matches("how do i budget"));
    }

    #[test]
    fn reply_serialization_round_trip() {
        let reply = Reply {
            category: Topic::Finance,
            body: "track your spending".to_string(),
        };
        let json = serde_json::to_string(&reply).unwrap();
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, Topic::Finance);
        assert_eq!(back.body, "track your spending");
    }
}
