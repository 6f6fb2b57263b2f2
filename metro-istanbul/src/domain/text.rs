//! Trilingual text.

use serde::Serialize;

/// The same text in Turkish, English and Arabic.
///
/// The API publishes most human-readable strings in these three languages.
/// Turkish is the primary language and is never empty in practice; the other
/// two may be.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LocalizedText {
    pub tr: String,
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(tr: impl Into<String>, en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// English text, falling back to Turkish when no translation was published.
    pub fn en_or_tr(&self) -> &str {
        if self.en.trim().is_empty() {
            &self.tr
        } else {
            &self.en
        }
    }
}
