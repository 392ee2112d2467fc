mod cli;
mod config;
mod errors;
mod generation;
mod layout;
mod llm_client;
mod render;
mod resume;
mod sanitize;
mod session;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::CohereClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🔍 Personalized Roadmap + Resume Generator");

    let inputs = cli::collect_inputs()?;

    let llm = CohereClient::new(config.cohere_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    session::run_session(&llm, &inputs, Path::new(session::OUTPUT_FILENAME)).await?;

    Ok(())
}
