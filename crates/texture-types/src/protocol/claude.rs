//! Anthropic Claude Messages API types.

use serde::{Deserialize, Serialize};

use crate::models::RawContentBlock;

/// Claude message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClaudeRole {
    /// Human user message.
    User,
}

/// A single conversation message with plain-text content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaudeMessage {
    pub role: ClaudeRole,
    pub content: String,
}

impl ClaudeMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ClaudeRole::User, content: content.into() }
    }
}

/// Server-side tool made available to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolDeclaration {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub name: String,
}

impl ToolDeclaration {
    /// The hosted web search tool.
    pub fn web_search() -> Self {
        Self { tool_type: "web_search_20250305".to_string(), name: "web_search".to_string() }
    }
}

/// Request body for `POST /v1/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDeclaration>>,
}

impl MessagesRequest {
    /// Single user-turn request.
    pub fn single(model: &str, max_tokens: u32, prompt: impl Into<String>) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            messages: vec![ClaudeMessage::user(prompt)],
            tools: None,
        }
    }

    pub fn with_web_search(mut self) -> Self {
        self.tools = Some(vec![ToolDeclaration::web_search()]);
        self
    }
}

/// Response body from `POST /v1/messages`.
///
/// `content` stays untyped here; block decoding happens in
/// [`RawContentBlock::from_value`] so unknown kinds never fail the response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub content: Vec<serde_json::Value>,
    pub stop_reason: Option<String>,
    pub usage: Option<ClaudeUsage>,
}

impl MessagesResponse {
    pub fn blocks(&self) -> Vec<RawContentBlock> {
        self.content.iter().map(RawContentBlock::from_value).collect()
    }
}

/// Claude usage statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ClaudeUsage {
    /// Number of input tokens consumed.
    pub input_tokens: u32,
    /// Number of output tokens generated.
    pub output_tokens: u32,
}
