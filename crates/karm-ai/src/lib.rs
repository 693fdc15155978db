//! Chat engine for Karm.
//!
//! Provides the session core of the assistant:
//! - An append-only turn log with the wire-level history view
//! - The fixed domain policy attached to every request
//! - A Gemini API client behind the `ChatModel` trait
//! - A session orchestrator enforcing one in-flight request per session

pub mod gemini;
pub mod log;
pub mod policy;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use log::MessageLog;
pub use policy::PolicyConfig;
pub use session::{SessionOrchestrator, SessionSnapshot, CONNECTION_FALLBACK};

/// A remote model adapter. Performs exactly one network call per `invoke`
/// and holds no state across calls.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn invoke(
        &self,
        policy: &PolicyConfig,
        history: &[HistoryMessage],
        utterance: &str,
    ) -> Result<String, RemoteUnavailable>;
}

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role name in the Gemini API vocabulary.
    pub fn api_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}

/// One message unit in the log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// A committed turn as sent on the wire: role already mapped to the
/// remote vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMessage {
    pub role: &'static str,
    pub text: String,
}

/// The single failure kind surfaced when the remote invocation cannot
/// produce a usable response. Network, authentication, quota, and
/// malformed-response causes all collapse into it; the cause is kept
/// for logging only.
#[derive(Debug, thiserror::Error)]
#[error("remote model unavailable: {cause}")]
pub struct RemoteUnavailable {
    cause: String,
}

impl RemoteUnavailable {
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    pub fn cause(&self) -> &str {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_maps_to_api_vocabulary() {
        assert_eq!(Role::User.api_name(), "user");
        assert_eq!(Role::Assistant.api_name(), "model");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn turn_constructors() {
        let turn = Turn::user("hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "hello");

        let turn = Turn::assistant("hi");
        assert_eq!(turn.role, Role::Assistant);
    }

    #[test]
    fn remote_unavailable_display_and_cause() {
        let err = RemoteUnavailable::new("HTTP 503");
        assert_eq!(err.to_string(), "remote model unavailable: HTTP 503");
        assert_eq!(err.cause(), "HTTP 503");
    }
}
