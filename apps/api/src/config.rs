use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external résumé-matching service. `None` only when
    /// running offline against the bundled dataset.
    pub match_service_url: Option<String>,
    /// When set, résumé uploads are answered from the bundled dataset and no
    /// network calls are made.
    pub match_offline: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_offline = std::env::var("MATCH_OFFLINE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let match_service_url = match std::env::var("MATCH_SERVICE_URL") {
            Ok(url) => Some(url),
            Err(_) if match_offline => None,
            Err(_) => {
                return Err(anyhow::anyhow!(
                    "Required environment variable 'MATCH_SERVICE_URL' is not set \
                     (set MATCH_OFFLINE=1 to run against the bundled dataset)"
                ))
            }
        };

        Ok(Config {
            match_service_url,
            match_offline,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
