use crate::error::ClientError;
use crate::types::ClientConfig;
use reqwest::Client;
use std::time::Duration;
use texture_types::protocol::{MessagesRequest, MessagesResponse};

/// Client for the Messages endpoint. Every call is a single attempt.
pub struct MessagesClient {
    client: Client,
    config: ClientConfig,
}

impl MessagesClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub async fn send(&self, request: &MessagesRequest) -> Result<MessagesResponse, ClientError> {
        tracing::debug!(
            model = %request.model,
            tools = request.tools.as_ref().map_or(0, Vec::len),
            "Sending messages request"
        );

        let resp = self
            .client
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(ClientError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::ServerError { status: status.as_u16(), message });
        }

        let body = resp.text().await?;
        let response: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                blocks = response.content.len(),
                "Messages response received"
            );
        }

        Ok(response)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.config.max_tokens
    }
}
