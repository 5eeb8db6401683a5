//! Keyword-matched canned response selection.

use crate::session::Topic;

use super::templates;
use super::traits::{Reply, ResponseSelector, Template};

/// Selects the first template whose keywords appear in the lowercased input,
/// falling back to a clarification prompt that quotes the input.
pub struct KeywordSelector {
    templates: &'static [Template],
}

impl KeywordSelector {
    pub fn new() -> Self {
        Self {
            templates: templates::default_templates(),
        }
    }

    /// Use a custom template table instead of the default one.
    pub fn with_templates(templates: &'static [Template]) -> Self {
        Self { templates }
    }
}

impl Default for KeywordSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector for KeywordSelector {
    fn select(&self, text: &str) -> Reply {
        let normalized = text.to_lowercase();
        for template in self.templates {
            if template.matches(&normalized) {
                tracing::debug!(
                    category = template.category.as_str(),
                    "matched response template"
                );
                return Reply {
                    category: template.category,
                    body: template.body.to_string(),
                };
            }
        }

        tracing::debug!("no template matched, using fallback");
        Reply {
            category: Topic::General,
            body: templates::fallback_body(text),
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
