//! Turns stage-2 text into the final record list.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde_json::Value;
use texture_types::{TextureCandidate, TextureRecord, TrustedReference};

use crate::preview::{PreviewProvider, UnsplashPreview};
use crate::trust::TrustPolicy;

/// References used when stage 2 output cannot be parsed.
pub const FALLBACK_LIMIT: usize = 8;
pub const FALLBACK_TITLE_CHARS: usize = 50;
pub const DEFAULT_SOURCE: &str = "Free Source";

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static TITLE_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn fence_regex() -> &'static Regex {
    FENCE_REGEX.get_or_init(|| Regex::new(r"```json|```").expect("Fence regex is valid"))
}

fn title_suffix_regex() -> &'static Regex {
    TITLE_SUFFIX_REGEX.get_or_init(|| Regex::new(r" - .*$").expect("Title suffix regex is valid"))
}

/// Result of reading stage-2 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredOutput {
    Parsed(Vec<TextureCandidate>),
    /// Not JSON, or JSON that is not an array.
    ParseFailed(String),
}

impl StructuredOutput {
    pub fn parse(raw_text: &str) -> Self {
        let cleaned = fence_regex().replace_all(raw_text, "");
        match serde_json::from_str::<Value>(cleaned.trim()) {
            Ok(Value::Array(elements)) => {
                Self::Parsed(elements.iter().filter_map(TextureCandidate::from_value).collect())
            },
            Ok(other) => Self::ParseFailed(format!("expected JSON array, got {}", kind_of(&other))),
            Err(e) => Self::ParseFailed(e.to_string()),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub struct ResultSynthesizer {
    policy: TrustPolicy,
    preview: Arc<dyn PreviewProvider>,
}

impl Default for ResultSynthesizer {
    fn default() -> Self {
        Self::new(TrustPolicy::default(), Arc::new(UnsplashPreview::default()))
    }
}

impl ResultSynthesizer {
    pub fn new(policy: TrustPolicy, preview: Arc<dyn PreviewProvider>) -> Self {
        Self { policy, preview }
    }

    /// Parse stage-2 text, falling back to `refs` when it is unusable.
    ///
    /// An empty result is a valid outcome, not an error.
    pub fn synthesize(
        &self,
        topic: &str,
        raw_text: &str,
        refs: &[TrustedReference],
    ) -> Vec<TextureRecord> {
        let candidates = match StructuredOutput::parse(raw_text) {
            StructuredOutput::Parsed(candidates) => {
                tracing::debug!(count = candidates.len(), "Structured output parsed");
                candidates
            },
            StructuredOutput::ParseFailed(reason) => {
                tracing::warn!(%reason, refs = refs.len(), "Structured output unusable, falling back to references");
                self.fallback_candidates(topic, refs)
            },
        };

        candidates
            .into_iter()
            .enumerate()
            .map(|(id, candidate)| self.normalize(topic, id, candidate))
            .collect()
    }

    pub fn fallback_candidates(
        &self,
        topic: &str,
        refs: &[TrustedReference],
    ) -> Vec<TextureCandidate> {
        refs.iter()
            .take(FALLBACK_LIMIT)
            .map(|r| TextureCandidate {
                title: Some(fallback_title(&r.title)).filter(|t| !t.trim().is_empty()),
                source: Some(
                    self.policy.matching_domain(&r.url).unwrap_or(DEFAULT_SOURCE).to_string(),
                ),
                page_url: Some(r.url.clone()),
                search_term: Some(format!("{topic} texture seamless 4k")),
            })
            .collect()
    }

    fn normalize(&self, topic: &str, id: usize, candidate: TextureCandidate) -> TextureRecord {
        let search_term = candidate.search_term.unwrap_or_default();
        TextureRecord {
            id,
            title: candidate.title.unwrap_or_else(|| format!("{topic} Texture {}", id + 1)),
            source: candidate.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            page_url: candidate.page_url.unwrap_or_default(),
            preview_url: self.preview.preview_url(topic, &search_term, id),
        }
    }
}

/// Drop a trailing " - Site Name" and cap the length.
fn fallback_title(title: &str) -> String {
    title_suffix_regex().replace(title, "").chars().take(FALLBACK_TITLE_CHARS).collect()
}
