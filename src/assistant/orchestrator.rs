//! The conversation orchestrator: append the user message synchronously,
//! deliver the assistant reply after the configured delay.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::AssistantConfig;
use crate::selector::{templates, ResponseSelector};
use crate::session::{Message, SessionStore, Topic};

/// Orchestrates one conversation: owns the session log, the response
/// selector, and the artificial reply latency.
///
/// For every accepted submission the user message is appended before the
/// deferred reply task is spawned, so a submission's reply always follows its
/// own user message. Overlapping submissions are allowed; no ordering is
/// imposed between two in-flight replies.
pub struct Assistant {
    store: Arc<dyn SessionStore>,
    selector: Arc<dyn ResponseSelector>,
    reply_delay: Duration,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl Assistant {
    pub fn new(
        store: Arc<dyn SessionStore>,
        selector: Arc<dyn ResponseSelector>,
        config: &AssistantConfig,
    ) -> Self {
        Self {
            store,
            selector,
            reply_delay: Duration::from_millis(config.reply_delay_ms),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Seed the log with the assistant's opening message.
    pub async fn seed_greeting(&self) -> Result<()> {
        self.store
            .append(Message::assistant(templates::GREETING, Topic::General))
            .await?;
        Ok(())
    }

    /// Submit user text.
    ///
    /// Empty or whitespace-only input is dropped and `false` is returned;
    /// otherwise the trimmed user message is appended immediately and a
    /// deferred reply is scheduled after the configured delay.
    pub async fn submit_user_text(&self, text: &str) -> Result<bool> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring empty submission");
            return Ok(false);
        }

        if !self.store.append(Message::user(trimmed)).await? {
            tracing::debug!("session closed, dropping submission");
            return Ok(false);
        }

        let store = Arc::clone(&self.store);
        let selector = Arc::clone(&self.selector);
        let delay = self.reply_delay;
        let submitted = trimmed.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = selector.select(&submitted);
            let message = Message::assistant(reply.body, reply.category);
            // The store drops the append if the session closed mid-delay.
            match store.append(message).await {
                Ok(true) => {}
                Ok(false) => tracing::debug!("session closed before reply was delivered"),
                Err(error) => tracing::warn!(%error, "failed to append assistant reply"),
            }
        });
        self.pending.lock().push(handle);

        Ok(true)
    }

    /// Ordered snapshot of the conversation.
    pub async fn messages(&self) -> Result<Vec<Message>> {
        self.store.all().await
    }

    pub async fn message_count(&self) -> Result<usize> {
        self.store.message_count().await
    }

    /// Wait until every scheduled reply has resolved.
    pub async fn flush(&self) -> Result<()> {
        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.pending.lock());
        for handle in handles {
            handle.await?;
        }
        Ok(())
    }

    /// End the session. In-flight deferred replies become no-ops.
    pub async fn close(&self) -> Result<()> {
        self.store.close().await
    }

    pub fn is_closed(&self) -> bool {
        self.store.is_closed()
    }
}
