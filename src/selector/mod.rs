//! Response selection — maps a user utterance to one canned reply.

pub mod keyword;
pub mod templates;
pub mod traits;

pub use keyword::KeywordSelector;
pub use templates::{default_templates, fallback_body, quick_questions, QuickQuestion, GREETING};
pub use traits::{Reply, ResponseSelector, Template};

/// Create the default keyword selector.
pub fn create_selector() -> Box<dyn ResponseSelector> {
    Box::new(KeywordSelector::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_keyword_selector() {
        let selector = create_selector();
        assert_eq!(selector.name(), "keyword");
    }
}
