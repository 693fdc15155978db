//! Configuration schema types for Karm.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Top-level Karm configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KarmConfig {
    pub model: ModelConfig,
}

/// Remote model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model identifier.
    pub name: String,
    /// Maximum output tokens per reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_config() {
        let config = KarmConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.max_tokens, 4096);
        assert_eq!(config.model.temperature, 0.7);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = KarmConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: KarmConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.model.name, config.model.name);
        assert_eq!(parsed.model.max_tokens, config.model.max_tokens);
    }
}
