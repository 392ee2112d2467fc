use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// `COHERE_API_KEY` is deliberately not required here: a missing key only
/// surfaces when the first generation call is attempted, as an API error.
#[derive(Debug, Clone)]
pub struct Config {
    pub cohere_api_key: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cohere_api_key: std::env::var("COHERE_API_KEY").unwrap_or_default(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
