//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Karm Configuration
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.5-flash"
# max_tokens = 4096       # 1-65536
# temperature = 0.7       # 0.0-2.0
"##
    .to_string()
}
