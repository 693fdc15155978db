//! Configuration validation.
//!
//! Validates numeric ranges and required fields, collecting all errors
//! into a single `ConfigError`.

use crate::schema::KarmConfig;
use karm_common::ConfigError;

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KarmConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }
    validate_range(&mut errors, "model.max_tokens", config.model.max_tokens, 1, 65536);
    validate_range_f64(&mut errors, "model.temperature", config.model.temperature, 0.0, 2.0);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::KarmConfig;

    #[test]
    fn default_config_validates() {
        assert!(validate(&KarmConfig::default()).is_ok());
    }

    #[test]
    fn empty_model_name_is_rejected() {
        let mut config = KarmConfig::default();
        config.model.name = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("model.name"));
    }

    #[test]
    fn out_of_range_values_are_collected() {
        let mut config = KarmConfig::default();
        config.model.max_tokens = 0;
        config.model.temperature = 5.0;
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("model.max_tokens"));
        assert!(msg.contains("model.temperature"));
    }
}
