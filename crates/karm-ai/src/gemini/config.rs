//! Gemini API client configuration.

use std::fmt;

use crate::RemoteUnavailable;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Create config from environment variables.
    ///
    /// Resolution order: `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self, RemoteUnavailable> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            return Ok(Self::new(key));
        }
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            return Ok(Self::new(key));
        }
        Err(RemoteUnavailable::new(
            "Gemini API not configured. Set GEMINI_API_KEY or GOOGLE_API_KEY.",
        ))
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("secret-key");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = GeminiConfig::new("k").with_max_tokens(512).with_temperature(0.2);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.temperature, 0.2);
    }
}
