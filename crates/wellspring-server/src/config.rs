//! Server Configuration
//!
//! All wiring knobs come from environment variables (a `.env` file is
//! honored). None of them change engine policy - score thresholds,
//! keyword sets, and rule tables are fixed.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_COACH_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bearer key for all pipeline routes; unset disables auth
    pub api_key: Option<String>,
    /// Simulated processing delay of the scripted coach
    pub coach_delay: Duration,
    /// Pin every simulated-inference draw for reproducible runs
    pub entropy_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host =
            std::env::var("WELLSPRING_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("WELLSPRING_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let api_key = std::env::var("WELLSPRING_API_KEY").ok();
        let coach_delay_ms = std::env::var("COACH_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .unwrap_or(DEFAULT_COACH_DELAY_MS);
        let entropy_seed = std::env::var("WELLSPRING_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok());
        Self {
            host,
            port,
            api_key,
            coach_delay: Duration::from_millis(coach_delay_ms),
            entropy_seed,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
