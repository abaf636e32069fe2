//! Sift application binary - composition root.
//!
//! Ties together the Sift crates into a single executable:
//! 1. Load configuration from TOML and secrets from the environment
//! 2. Build the Gemini language-model client
//! 3. Build the Supabase SQL executor
//! 4. Start the axum REST API server

use std::sync::Arc;

use clap::Parser;

use sift_api::state::AppState;
use sift_core::config::SiftConfig;
use sift_db::{SqlExecutor, SupabaseClient};
use sift_llm::{GeminiClient, LanguageModel};

mod cli;
use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env before anything reads the environment; absence is fine.
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = SiftConfig::load_or_default(&config_file);
    config.general.port = args.resolve_port(config.general.port);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing. RUST_LOG still wins over config when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting Sift v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Language model.
    let llm = GeminiClient::from_env(config.llm.clone())?;
    tracing::info!(
        chat_model = %config.llm.chat_model,
        sql_model = %config.llm.sql_model,
        "Gemini client ready"
    );

    // SQL executor.
    let executor = SupabaseClient::from_env(&config.database)?;
    tracing::info!(rpc = %config.database.rpc_function, "Supabase client ready");

    let state = AppState::new(
        config,
        Arc::new(llm) as Arc<dyn LanguageModel>,
        Arc::new(executor) as Arc<dyn SqlExecutor>,
    );

    sift_api::start_server(state).await?;

    Ok(())
}
