//! Gemini API client struct, request building, and response parsing.

use tracing::debug;

use crate::{HistoryMessage, PolicyConfig, RemoteUnavailable};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// The model comes from the policy so that every request targets the
    /// identifier the policy was initialized with.
    pub(crate) fn api_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, model)
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// The committed history comes first; the live utterance is appended
    /// last as a `user` content. The policy instruction rides in
    /// `systemInstruction` on every request.
    pub(crate) fn build_request_body(
        &self,
        policy: &PolicyConfig,
        history: &[HistoryMessage],
        utterance: &str,
    ) -> serde_json::Value {
        let mut contents = Vec::with_capacity(history.len() + 1);

        for msg in history {
            contents.push(serde_json::json!({
                "role": msg.role,
                "parts": [{ "text": msg.text }]
            }));
        }
        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": utterance }]
        }));

        serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": policy.instruction() }]
            },
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Parse a Gemini response into the reply text.
    pub(crate) fn parse_response(
        &self,
        json: serde_json::Value,
    ) -> Result<String, RemoteUnavailable> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| RemoteUnavailable::new("no candidates in response"))?;

        let first = candidates
            .first()
            .ok_or_else(|| RemoteUnavailable::new("empty candidates"))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut text = String::new();
        for part in &parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
        }

        if text.is_empty() {
            return Err(RemoteUnavailable::new("response contained no text"));
        }

        if let Some(meta) = json.get("usageMetadata") {
            debug!(
                input_tokens = meta["promptTokenCount"].as_u64().unwrap_or(0),
                output_tokens = meta["candidatesTokenCount"].as_u64().unwrap_or(0),
                "gemini token usage"
            );
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key"))
    }

    #[test]
    fn api_url_targets_policy_model() {
        let url = client().api_url("gemini-2.5-flash");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_places_utterance_last() {
        let history = vec![
            HistoryMessage {
                role: "user",
                text: "What is dengue fever?".into(),
            },
            HistoryMessage {
                role: "model",
                text: "Dengue is a mosquito-borne viral infection...".into(),
            },
        ];
        let body = client().build_request_body(&PolicyConfig::karm(), &history, "How is it treated?");

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "How is it treated?");
    }

    #[test]
    fn request_body_carries_policy_instruction() {
        let policy = PolicyConfig::karm();
        let body = client().build_request_body(&policy, &[], "What's the weather today?");

        // The instruction rides with every request; the query itself is
        // forwarded untouched. Refusal is the model's job.
        let instruction = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert_eq!(instruction, policy.instruction());
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "What's the weather today?"
        );
    }

    #[test]
    fn request_body_carries_generation_config() {
        let body = client().build_request_body(&PolicyConfig::karm(), &[], "hi");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn parse_response_concatenates_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Dengue is " }, { "text": "a viral infection." }]
                }
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 7 }
        });
        let text = client().parse_response(json).unwrap();
        assert_eq!(text, "Dengue is a viral infection.");
    }

    #[test]
    fn parse_response_without_candidates_fails() {
        let err = client()
            .parse_response(serde_json::json!({ "error": "boom" }))
            .unwrap_err();
        assert!(err.cause().contains("no candidates"));
    }

    #[test]
    fn parse_response_with_empty_text_fails() {
        let json = serde_json::json!({
            "candidates": [{ "content": { "parts": [] } }]
        });
        let err = client().parse_response(json).unwrap_err();
        assert!(err.cause().contains("no text"));
    }
}
