//! The canned response table and related static content.

use crate::session::Topic;

use super::traits::Template;

/// The assistant's opening message.
pub const GREETING: &str = "Hi! I'm your MindVest assistant. I can help you \
with health, finance, and study questions. What would you like to know?";

const SLEEP_TIPS: &str = "Great question about sleep! A few evidence-based \
ways to improve your sleep quality:\n\n\
1. Consistent schedule: go to bed and wake up at the same time daily\n\
2. Screen time: avoid screens for the hour before bed\n\
3. Environment: keep your room cool and dark\n\
4. Exercise: regular activity, but not close to bedtime\n\
5. Caffeine: none after 2 PM\n\n\
Aim for 8 hours consistently. Would you like to set up a sleep improvement \
challenge?";

const BUDGET_TIPS: &str = "I can help you with budgeting! Here's a plan to \
stretch your budget further:\n\n\
1. Food: cook a few more meals at home\n\
2. Transport: walk or bike when possible\n\
3. Entertainment: use student discounts\n\
4. Books: buy used or digital\n\n\
Challenge: try to save an extra $50 this month. I'll track your progress!";

const STUDY_TIPS: &str = "Let me help you study more effectively. Techniques \
that work:\n\n\
1. Pomodoro: 25 minutes of focused work, then a 5 minute break\n\
2. Active recall: test yourself instead of re-reading\n\
3. Spaced repetition: review material at increasing intervals\n\
4. Teach others: explaining a concept is the fastest way to learn it\n\n\
Would you like a study schedule?";

// Priority order: health beats finance beats study.
static TEMPLATES: [Template; 3] = [
    Template {
        category: Topic::Health,
        keywords: &["sleep", "tired"],
        body: SLEEP_TIPS,
    },
    Template {
        category: Topic::Finance,
        keywords: &["budget", "money", "save"],
        body: BUDGET_TIPS,
    },
    Template {
        category: Topic::Study,
        keywords: &["study", "learn", "exam"],
        body: STUDY_TIPS,
    },
];

/// The ordered default template table.
pub fn default_templates() -> &'static [Template] {
    &TEMPLATES
}

/// Build the clarification reply used when no template matches. Quotes the
/// user's text verbatim.
pub fn fallback_body(text: &str) -> String {
    format!(
        "I understand you're asking about: \"{text}\"\n\n\
         I'm here to help with health, finance, and study questions. Could \
         you be more specific? For example:\n\n\
         - Health: sleep, exercise, mood, stress management\n\
         - Finance: budgeting, saving, expense tracking\n\
         - Study: learning techniques, time management, course planning"
    )
}

/// A suggested starter question, one per coaching topic.
#[derive(Debug, Clone, Copy)]
pub struct QuickQuestion {
    pub category: Topic,
    pub question: &'static str,
}

static QUICK_QUESTIONS: [QuickQuestion; 3] = [
    QuickQuestion {
        category: Topic::Health,
        question: "How can I improve my sleep quality?",
    },
    QuickQuestion {
        category: Topic::Finance,
        question: "What are some budgeting tips for students?",
    },
    QuickQuestion {
        category: Topic::Study,
        question: "How can I study more effectively?",
    },
];

/// Suggested starter questions shown when a session opens.
pub fn quick_questions() -> &'static [QuickQuestion] {
    &QUICK_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_health_finance_study() {
        let categories: Vec<Topic> = default_templates().iter().map(|t| t.category).collect();
        assert_eq!(categories, vec![Topic::Health, Topic::Finance, Topic::Study]);
    }

    #[test]
    fn every_template_has_keywords_and_a_body() {
        for template in default_templates() {
            assert!(!template.keywords.is_empty());
            assert!(!template.body.is_empty());
        }
    }

    #[test]
    fn fallback_quotes_the_input_verbatim() {
        let body = fallback_body("Random QUESTION");
        assert!(body.contains("Random QUESTION"));
    }

    #[test]
    fn quick_questions_cover_each_coaching_topic() {
        let questions = quick_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().any(|q| q.category == Topic::Health));
        assert!(questions.iter().any(|q| q.category == Topic::Finance));
        assert!(questions.iter().any(|q| q.category == Topic::Study));
    }

    #[test]
    fn each_quick_question_triggers_its_own_topic() {
        // Keep the suggested questions in sync with the keyword table.
        for question in quick_questions() {
            let normalized = question.question.to_lowercase();
            let matched = default_templates()
                .iter()
                .find(|t| t.matches(&normalized))
                .map(|t| t.category);
            assert_eq!(matched, Some(question.category));
        }
    }
}
