use serde::Serialize;

use super::category::Category;

/// A validated search query: trimmed and never empty.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
}

impl SearchQuery {
    /// Returns `None` when `raw` is empty after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { text: text.to_string(), category: None })
    }

    pub fn from_category(category: &'static Category) -> Self {
        Self { text: category.label.to_string(), category: Some(category.id) }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Id of the category chip this query came from, if any.
    pub fn category(&self) -> Option<&'static str> {
        self.category
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
