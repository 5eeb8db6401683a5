//! In-memory session store implementation.

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::traits::{Message, SessionStore};

/// An in-memory session store backed by a mutex-protected vector.
///
/// Closing the store flips a flag rather than freeing the log, so a deferred
/// append that races with teardown degrades to a no-op instead of reviving
/// the session.
pub struct InMemorySessionStore {
    messages: Mutex<Vec<Message>>,
    closed: AtomicBool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn append(&self, mut message: Message) -> Result<bool> {
        if self.closed.load(Ordering::SeqCst) {
            tracing::debug!(role = ?message.role, "session closed, dropping append");
            return Ok(false);
        }

        let mut messages = self.messages.lock();
        // Wall clock can step backwards; keep created_at non-decreasing in
        // append order.
        if let Some(last) = messages.last() {
            if message.created_at < last.created_at {
                message.created_at = last.created_at;
            }
        }
        messages.push(message);
        Ok(true)
    }

    async fn all(&self) -> Result<Vec<Message>> {
        let messages = self.messages.lock();
        Ok(messages.clone())
    }

    async fn recent(&self, limit: Option<usize>) -> Result<Vec<Message>> {
        let messages = self.messages.lock();
        match limit {
            Some(n) => {
                let start = messages.len().saturating_sub(n);
                Ok(messages[start..].to_vec())
            }
            None => Ok(messages.clone()),
        }
    }

    async fn message_count(&self) -> Result<usize> {
        let messages = self.messages.lock();
        Ok(messages.len())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "in_memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, Topic};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn append_and_snapshot() {
        let store = InMemorySessionStore::new();
        assert!(store.append(Message::user("hello")).await.unwrap());
        assert!(store
            .append(Message::assistant("hi there", Topic::General))
            .await
            .unwrap());

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].role, Role::User);
        assert_eq!(all[1].role, Role::Assistant);
        assert_eq!(store.message_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_later_appends() {
        let store = InMemorySessionStore::new();
        store.append(Message::user("first")).await.unwrap();

        let snapshot = store.all().await.unwrap();
        store.append(Message::user("second")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.message_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn recent_returns_most_recent_entries() {
        let store = InMemorySessionStore::new();
        for i in 0..5 {
            store
                .append(Message::user(format!("message {}", i)))
                .await
                .unwrap();
        }

        let all = store.recent(None).await.unwrap();
        assert_eq!(all.len(), 5);

        let last_two = store.recent(Some(2)).await.unwrap();
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].content, "message 3");
        assert_eq!(last_two[1].content, "message 4");
    }

    #[tokio::test]
    async fn append_after_close_is_dropped() {
        let store = InMemorySessionStore::new();
        store.append(Message::user("hello")).await.unwrap();
        store.close().await.unwrap();

        assert!(store.is_closed());
        assert!(!store.append(Message::user("too late")).await.unwrap());
        assert_eq!(store.message_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let store = InMemorySessionStore::new();
        store.close().await.unwrap();
        store.close().await.unwrap();
        assert!(store.is_closed());
    }

    #[tokio::test]
    async fn backwards_timestamp_is_clamped() {
        let store = InMemorySessionStore::new();
        store.append(Message::user("first")).await.unwrap();

        let mut stale = Message::user("second");
        stale.created_at = Utc::now() - Duration::hours(1);
        store.append(stale).await.unwrap();

        let all = store.all().await.unwrap();
        assert!(all[1].created_at >= all[0].created_at);
    }
}
