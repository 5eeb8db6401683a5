pub mod schema;

pub use schema::{AssistantConfig, Config};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexported_config_default_is_constructible() {
        let config = Config::default();

        assert_eq!(config.assistant.reply_delay_ms, 1000);
        assert!(config.assistant.seed_greeting);
    }
}
