//! Frequently asked questions.

use serde::Serialize;

/// A question and answer from the operator's FAQ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub id: u32,
    pub question: String,
    pub answer: String,
    /// Whether the question is pinned as high priority.
    pub priority: bool,
    pub short_question_title: Option<String>,
    /// Language code of this entry, e.g. "tr" or "en".
    pub language: String,
}

impl Faq {
    /// The short title if one was published, otherwise the full question.
    pub fn title(&self) -> &str {
        self.short_question_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.question)
    }
}
