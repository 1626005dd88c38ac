/// Application configuration module
use std::env;

/// Shared public key with a small hourly quota, used when no key is configured.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

pub const DEFAULT_NASA_API_BASE: &str = "https://api.nasa.gov/mars-photos/api/v1";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub nasa_api_base: String,
    pub nasa_api_key: String,
    pub host: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let nasa_api_key = lookup("NASA_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEMO_API_KEY.to_string());

        let nasa_api_base = lookup("NASA_API_BASE")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_NASA_API_BASE.to_string());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Self {
            nasa_api_base,
            nasa_api_key,
            host,
            port: parse_or(lookup("PORT"), 5000),
            upstream_timeout_secs: parse_or(lookup("UPSTREAM_TIMEOUT_SECS"), 30),
        })
    }

    /// Address in `host:port` form, resolved at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the shared demo key is in use.
    pub fn uses_demo_key(&self) -> bool {
        self.nasa_api_key == DEMO_API_KEY
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
