//! Pulls trusted references and context text out of stage-1 content blocks.

use std::collections::HashSet;

use texture_types::{RawContentBlock, TrustedReference};

use crate::trust::TrustPolicy;

/// Characters of assistant prose forwarded to the structuring stage.
pub const CONTEXT_CHAR_LIMIT: usize = 500;

/// Output of a scan: deduplicated references plus auxiliary context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// First-seen order, unique by url.
    pub references: Vec<TrustedReference>,
    /// Text blocks joined with newlines, cut to [`CONTEXT_CHAR_LIMIT`] chars.
    pub context: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceExtractor {
    policy: TrustPolicy,
}

impl ReferenceExtractor {
    pub fn new(policy: TrustPolicy) -> Self {
        Self { policy }
    }

    pub fn extract(&self, blocks: &[RawContentBlock]) -> Extraction {
        let mut references = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut texts: Vec<&str> = Vec::new();

        for block in blocks {
            match block {
                RawContentBlock::Text { text } => texts.push(text),
                RawContentBlock::SearchResultSet { items } => {
                    for item in items {
                        let Some(url) = item.url.as_deref() else {
                            continue;
                        };
                        if !self.policy.is_trusted(url) || !seen.insert(url) {
                            continue;
                        }
                        references.push(TrustedReference {
                            title: item.title.clone().unwrap_or_default(),
                            url: url.to_string(),
                            snippet: item.snippet.clone().unwrap_or_default(),
                        });
                    }
                },
                RawContentBlock::Other { .. } => {},
            }
        }

        let context = texts.join("\n").chars().take(CONTEXT_CHAR_LIMIT).collect();

        tracing::debug!(
            references = references.len(),
            text_blocks = texts.len(),
            "Extracted trusted references"
        );

        Extraction { references, context }
    }
}
