//! Texture entries before and after normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An untrusted texture entry as produced by the structuring stage.
///
/// Every field is optional; blank strings and non-string values are treated
/// as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextureCandidate {
    pub title: Option<String>,
    pub source: Option<String>,
    pub page_url: Option<String>,
    pub search_term: Option<String>,
}

impl TextureCandidate {
    /// Coerce an arbitrary JSON element. Non-objects yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let field = |name: &str| {
            obj.get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        Some(Self {
            title: field("title"),
            source: field("source"),
            page_url: field("pageUrl"),
            search_term: field("searchTerm"),
        })
    }
}

/// A display-ready texture. `id` equals the record's index in its list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextureRecord {
    pub id: usize,
    pub title: String,
    pub source: String,
    /// Download page; empty when the candidate had none.
    pub page_url: String,
    pub preview_url: String,
}

impl TextureRecord {
    pub fn has_page(&self) -> bool {
        !self.page_url.is_empty()
    }
}

/// The record currently opened in a preview overlay.
///
/// Holds its own copy; the published result list is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSelection {
    current: Option<TextureRecord>,
}

impl PreviewSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, record: &TextureRecord) {
        self.current = Some(record.clone());
    }

    /// Select by id from a published list. Returns false if no such record.
    pub fn select_id(&mut self, records: &[TextureRecord], id: usize) -> bool {
        match records.iter().find(|r| r.id == id) {
            Some(record) => {
                self.select(record);
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&TextureRecord> {
        self.current.as_ref()
    }
}
