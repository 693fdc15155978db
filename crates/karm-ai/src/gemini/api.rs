//! ChatModel trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{ChatModel, HistoryMessage, PolicyConfig, RemoteUnavailable};

use super::client::GeminiClient;

#[async_trait]
impl ChatModel for GeminiClient {
    async fn invoke(
        &self,
        policy: &PolicyConfig,
        history: &[HistoryMessage],
        utterance: &str,
    ) -> Result<String, RemoteUnavailable> {
        let body = self.build_request_body(policy, history, utterance);
        let url = self.api_url(policy.model());

        debug!(model = %policy.model(), history_len = history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteUnavailable::new(format!("network: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Gemini API rate limited");
            return Err(RemoteUnavailable::new("rate limited"));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API error response");
            return Err(RemoteUnavailable::new(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RemoteUnavailable::new(format!("parse: {e}")))?;

        self.parse_response(json)
    }
}
