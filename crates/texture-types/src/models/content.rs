//! Content blocks returned by the assistant, decoded permissively.

use serde::Serialize;
use serde_json::Value;

/// One item from a web search result set. Every field may be missing.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RawSearchItem {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

/// A single content block from an assistant response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum RawContentBlock {
    Text { text: String },
    SearchResultSet { items: Vec<RawSearchItem> },
    /// Any block kind the pipeline does not consume (tool use, thinking, ...).
    Other { kind: String },
}

impl RawContentBlock {
    /// Decode one wire block. Never fails: unknown shapes become `Other`.
    pub fn from_value(value: &Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
        match kind {
            "text" => Self::Text {
                text: value.get("text").and_then(Value::as_str).unwrap_or_default().to_string(),
            },
            "web_search_tool_result" => {
                // `content` is an object instead of an array when the search errored
                let items = value
                    .get("content")
                    .and_then(Value::as_array)
                    .map(|arr| {
                        arr.iter()
                            .filter(|item| {
                                item.get("type").and_then(Value::as_str)
                                    == Some("web_search_result")
                            })
                            .map(RawSearchItem::from_value)
                            .collect()
                    })
                    .unwrap_or_default();
                Self::SearchResultSet { items }
            },
            other => Self::Other { kind: other.to_string() },
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

impl RawSearchItem {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self { title: field("title"), url: field("url"), snippet: field("snippet") }
    }
}
