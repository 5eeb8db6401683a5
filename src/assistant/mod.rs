//! Conversation orchestration — sequences user submissions and their
//! deferred assistant replies over one session.

pub mod orchestrator;

pub use orchestrator::Assistant;

use std::sync::Arc;

use anyhow::Result;

use crate::config::AssistantConfig;
use crate::selector::KeywordSelector;
use crate::session::InMemorySessionStore;

/// Create an assistant wired with the default in-memory store and keyword
/// selector. Seeds the greeting when the config asks for one.
pub async fn create_assistant(config: &AssistantConfig) -> Result<Assistant> {
    let assistant = Assistant::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(KeywordSelector::new()),
        config,
    );
    if config.seed_greeting {
        assistant.seed_greeting().await?;
    }
    Ok(assistant)
}
