//! Network maps published by the operator.

use serde::Serialize;

use super::text::LocalizedText;

/// A downloadable network or line map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetroMap {
    pub id: u32,
    pub title: LocalizedText,
    pub image_url: String,
    pub icon_url: String,
    /// Usually a PDF.
    pub document_url: String,
    pub is_active: bool,
    pub order: i32,
    /// Publication date, in the API's own text form.
    pub date: String,
}
