//! # Texture Core
//!
//! The search-and-synthesis pipeline behind Texture Search.
//!
//! ```text
//! SearchSession::run_search(query)
//!   ├── QueryClient::search          stage 1: assistant + web search
//!   ├── ReferenceExtractor::extract  allowlist filter + dedup
//!   ├── StructuringClient::structure stage 2: assistant → JSON text
//!   └── ResultSynthesizer::synthesize parse or fall back, normalize
//! ```
//!
//! Only the most recently started search may publish its outcome; older
//! runs are discarded by generation token.

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod assistant;
pub mod extractor;
pub mod logger;
pub mod preview;
pub mod prompts;
pub mod session;
pub mod synthesizer;
pub mod trust;

pub use assistant::{AssistantBackend, QueryClient, StructuringClient};
pub use extractor::{Extraction, ReferenceExtractor};
pub use preview::{PreviewProvider, UnsplashPreview};
pub use session::SearchSession;
pub use synthesizer::{ResultSynthesizer, StructuredOutput};
pub use trust::{TrustPolicy, TRUSTED_SOURCES};
