//! Karm configuration system.
//!
//! Provides TOML-based configuration with sensible defaults so partial
//! configs work out of the box. A missing config file is created from a
//! commented template on first run.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::KarmConfig;

use karm_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result. Validation problems are
/// logged as warnings; the parsed config is still returned.
pub fn load_config() -> Result<KarmConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit file path (CLI override).
pub fn load_config_from(path: &Path) -> Result<KarmConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
