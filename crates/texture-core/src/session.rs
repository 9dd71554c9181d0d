//! Search session state machine.
//!
//! ```text
//! Idle ──run_search──▶ Loading ──▶ Success | Empty | Failed
//!                         ▲                   │
//!                         └─────run_search────┘
//! ```
//!
//! Each `run_search` takes a new generation token when it enters Loading.
//! A run may only commit its outcome while its token is still current, so a
//! superseded run finishes silently.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use texture_types::{SearchError, SearchQuery, SessionState, TextureRecord};

use crate::assistant::{QueryClient, StructuringClient};
use crate::extractor::ReferenceExtractor;
use crate::preview::PreviewProvider;
use crate::synthesizer::ResultSynthesizer;
use crate::trust::TrustPolicy;

pub struct SearchSession {
    query_client: Arc<dyn QueryClient>,
    structuring_client: Arc<dyn StructuringClient>,
    extractor: ReferenceExtractor,
    synthesizer: ResultSynthesizer,
    /// Guards token bumps and commits so a check-then-publish cannot interleave.
    generation: Mutex<u64>,
    state_tx: watch::Sender<SessionState>,
}

impl SearchSession {
    pub fn new(
        query_client: Arc<dyn QueryClient>,
        structuring_client: Arc<dyn StructuringClient>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Idle);
        Self {
            query_client,
            structuring_client,
            extractor: ReferenceExtractor::default(),
            synthesizer: ResultSynthesizer::default(),
            generation: Mutex::new(0),
            state_tx,
        }
    }

    /// Replace the allowlist and preview source used by extraction and synthesis.
    pub fn with_components(
        mut self,
        policy: TrustPolicy,
        preview: Arc<dyn PreviewProvider>,
    ) -> Self {
        self.extractor = ReferenceExtractor::new(policy.clone());
        self.synthesizer = ResultSynthesizer::new(policy, preview);
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Receiver that observes every published transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn generation(&self) -> u64 {
        *self.generation.lock()
    }

    /// Run a full search for `query`.
    ///
    /// Blank queries are ignored. Returns the state this run committed, or
    /// `None` if the query was rejected or a newer search superseded it.
    pub async fn run_search(&self, query: &str) -> Option<SessionState> {
        let query = SearchQuery::new(query)?;
        self.run(&query).await
    }

    pub async fn run(&self, query: &SearchQuery) -> Option<SessionState> {
        let token = self.begin();
        tracing::info!(generation = token, query = %query, "Search started");

        let outcome = match self.pipeline(query.as_str()).await {
            Ok(records) if records.is_empty() => SessionState::Empty,
            Ok(records) => SessionState::Success(records),
            Err(e) => {
                tracing::error!(generation = token, error = %e, "Search failed");
                SessionState::Failed(e.user_message().to_string())
            },
        };

        self.commit(token, outcome)
    }

    async fn pipeline(&self, topic: &str) -> Result<Vec<TextureRecord>, SearchError> {
        let blocks = self.query_client.search(topic).await?;
        tracing::debug!(blocks = blocks.len(), "Stage 1 complete");

        let extraction = self.extractor.extract(&blocks);

        let raw_text = self
            .structuring_client
            .structure(topic, &extraction.references, &extraction.context)
            .await?;
        tracing::debug!(chars = raw_text.len(), "Stage 2 complete");

        Ok(self.synthesizer.synthesize(topic, &raw_text, &extraction.references))
    }

    /// Enter Loading under a fresh token, dropping any previous result.
    fn begin(&self) -> u64 {
        let mut generation = self.generation.lock();
        *generation += 1;
        self.state_tx.send_replace(SessionState::Loading);
        *generation
    }

    fn commit(&self, token: u64, outcome: SessionState) -> Option<SessionState> {
        let generation = self.generation.lock();
        if *generation != token {
            tracing::warn!(
                generation = token,
                current = *generation,
                "Discarding superseded search result"
            );
            return None;
        }

        match &outcome {
            SessionState::Success(records) => {
                tracing::info!(generation = token, count = records.len(), "Search succeeded")
            },
            SessionState::Empty => tracing::info!(generation = token, "Search found no textures"),
            _ => {},
        }
        self.state_tx.send_replace(outcome.clone());
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use texture_types::{RawContentBlock, RawSearchItem, TrustedReference};

    struct FixedQuery {
        blocks: Vec<RawContentBlock>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl QueryClient for FixedQuery {
        async fn search(&self, _topic: &str) -> Result<Vec<RawContentBlock>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.blocks.clone())
        }
    }

    struct FixedText(Result<String, SearchError>);

    #[async_trait]
    impl StructuringClient for FixedText {
        async fn structure(
            &self,
            _topic: &str,
            _refs: &[TrustedReference],
            _context: &str,
        ) -> Result<String, SearchError> {
            self.0.clone()
        }
    }

    fn session(blocks: Vec<RawContentBlock>, text: Result<String, SearchError>) -> SearchSession {
        SearchSession::new(
            Arc::new(FixedQuery { blocks, calls: AtomicUsize::new(0) }),
            Arc::new(FixedText(text)),
        )
    }

    #[tokio::test]
    async fn test_blank_query_leaves_idle() {
        let s = session(vec![], Ok("[]".to_string()));
        assert_eq!(s.run_search("").await, None);
        assert_eq!(s.run_search("   ").await, None);
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.generation(), 0);
    }

    #[tokio::test]
    async fn test_oak_wood_fallback_end_to_end() {
        let blocks = vec![RawContentBlock::SearchResultSet {
            items: vec![RawSearchItem {
                title: Some("Oak Planks - AmbientCG".to_string()),
                url: Some("https://ambientcg.com/view?id=Planks012".to_string()),
                snippet: Some("...".to_string()),
            }],
        }];
        let s = session(blocks, Ok("not-json".to_string()));

        let state = s.run_search("oak wood").await;
        let records = s.state().records().to_vec();

        assert_eq!(state, Some(s.state()));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].title, "Oak Planks");
        assert_eq!(records[0].source, "ambientcg.com");
        assert_eq!(records[0].page_url, "https://ambientcg.com/view?id=Planks012");
    }

    #[tokio::test]
    async fn test_empty_outcome_is_not_failure() {
        let s = session(vec![], Ok("garbage".to_string()));
        assert_eq!(s.run_search("velvet").await, Some(SessionState::Empty));
    }

    #[tokio::test]
    async fn test_stage_error_fails_with_generic_message() {
        let s = session(vec![], Err(SearchError::malformed("secret upstream detail")));
        let state = s.run_search("brick").await.unwrap();
        assert_eq!(state.error_message(), Some("Search failed. Please try again."));
    }

    #[tokio::test]
    async fn test_new_search_clears_previous_result() {
        let s = session(vec![], Ok(r#"[{"title": "A"}]"#.to_string()));
        s.run_search("first").await;
        assert_eq!(s.state().records().len(), 1);

        let mut rx = s.subscribe();
        let token = s.begin();
        assert!(rx.borrow_and_update().is_loading());
        assert!(s.state().records().is_empty());
        assert_eq!(token, 2);
    }

    #[tokio::test]
    async fn test_custom_components_flow_through() {
        struct FixedPreview;
        impl PreviewProvider for FixedPreview {
            fn preview_url(&self, topic: &str, _search_term: &str, id: usize) -> String {
                format!("preview://{topic}/{id}")
            }
        }

        let blocks = vec![RawContentBlock::SearchResultSet {
            items: vec![
                RawSearchItem {
                    title: Some("Kept".to_string()),
                    url: Some("https://textures.test/kept".to_string()),
                    snippet: None,
                },
                RawSearchItem {
                    title: Some("Dropped".to_string()),
                    url: Some("https://ambientcg.com/dropped".to_string()),
                    snippet: None,
                },
            ],
        }];
        let s = session(blocks, Ok("nope".to_string()))
            .with_components(TrustPolicy::with_domains(["textures.test"]), Arc::new(FixedPreview));

        let state = s.run_search("tile").await.unwrap();
        let records = state.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "textures.test");
        assert_eq!(records[0].preview_url, "preview://tile/0");
    }

    #[tokio::test]
    async fn test_stale_commit_is_discarded() {
        let s = session(vec![], Ok("[]".to_string()));
        let old = s.begin();
        let _new = s.begin();
        assert_eq!(s.commit(old, SessionState::Empty), None);
        assert!(s.state().is_loading());
    }
}
