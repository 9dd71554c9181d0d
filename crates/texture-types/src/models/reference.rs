use serde::{Deserialize, Serialize};

/// A search result whose url passed the trust allowlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrustedReference {
    pub title: String,
    pub url: String,
    pub snippet: String,
}
