//! Seams to the external assistant and their Messages-API implementation.

use async_trait::async_trait;
use texture_client::MessagesClient;
use texture_types::protocol::MessagesRequest;
use texture_types::{RawContentBlock, SearchError, TrustedReference};

use crate::prompts;
use crate::trust::TrustPolicy;

/// Stage 1: natural-language search with web search enabled.
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn search(&self, topic: &str) -> Result<Vec<RawContentBlock>, SearchError>;
}

/// Stage 2: turn references and context into text expected to hold a JSON array.
#[async_trait]
pub trait StructuringClient: Send + Sync {
    async fn structure(
        &self,
        topic: &str,
        refs: &[TrustedReference],
        context: &str,
    ) -> Result<String, SearchError>;
}

/// Both stages backed by one [`MessagesClient`]. Single attempt per call.
pub struct AssistantBackend {
    client: MessagesClient,
    policy: TrustPolicy,
}

impl AssistantBackend {
    pub fn new(client: MessagesClient, policy: TrustPolicy) -> Self {
        Self { client, policy }
    }

    fn request(&self, prompt: String) -> MessagesRequest {
        MessagesRequest::single(self.client.model(), self.client.max_tokens(), prompt)
    }
}

#[async_trait]
impl QueryClient for AssistantBackend {
    async fn search(&self, topic: &str) -> Result<Vec<RawContentBlock>, SearchError> {
        let prompt = prompts::search_instruction(topic, self.policy.domains());
        let request = self.request(prompt).with_web_search();
        let response = self.client.send(&request).await?;
        Ok(response.blocks())
    }
}

#[async_trait]
impl StructuringClient for AssistantBackend {
    async fn structure(
        &self,
        topic: &str,
        refs: &[TrustedReference],
        context: &str,
    ) -> Result<String, SearchError> {
        let prompt = prompts::structuring_instruction(topic, refs, context);
        let response = self.client.send(&self.request(prompt)).await?;
        Ok(response.blocks().iter().filter_map(RawContentBlock::text).collect())
    }
}
