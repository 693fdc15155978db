mod care;
mod cli;
mod repl;

use std::sync::Arc;

use karm_ai::{GeminiClient, GeminiConfig, PolicyConfig, SessionOrchestrator};
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/karm-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    load_dotenv();

    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("karm=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "karm=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Karm v{} starting...", env!("CARGO_PKG_VERSION"));

    // The care lookup needs no model or API key
    if let Some(cli::Command::Care { lat, lng }) = args.command {
        care::run(lat.zip(lng));
        return;
    }

    // Load config
    let config = match args.config.as_deref() {
        Some(path) => karm_config::load_config_from(std::path::Path::new(path)),
        None => karm_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        karm_config::KarmConfig::default()
    });

    let gemini = match GeminiConfig::from_env() {
        Ok(c) => c
            .with_max_tokens(config.model.max_tokens)
            .with_temperature(config.model.temperature),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let model = args.model.unwrap_or(config.model.name);
    let policy = PolicyConfig::karm().with_model(model);
    let client = Arc::new(GeminiClient::new(gemini));
    let orchestrator = Arc::new(SessionOrchestrator::new(policy, client));

    if let Err(e) = repl::run(orchestrator).await {
        tracing::error!("REPL error: {e}");
    }
    tracing::info!("Shutdown complete");
}
