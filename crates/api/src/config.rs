use std::env;
use std::time::Duration;

use zenjourney_agents::DEFAULT_ADVISOR_TIMEOUT;

pub const DEFAULT_API_KEY: &str = "dev-zenjourney-key";
const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5500",
    "http://127.0.0.1:5500",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Runtime settings for the HTTP server, read from `ZENJOURNEY_*` variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub api_key: String,
    pub advisor_timeout: Duration,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
    pub allowed_origins: Vec<String>,
    /// Key the rate limiter on the first `x-forwarded-for` hop. Only enable
    /// behind a proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            advisor_timeout: DEFAULT_ADVISOR_TIMEOUT,
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 80,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            trust_forwarded_for: false,
        }
    }
}

impl ApiConfig {
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env::var("ZENJOURNEY_BIND").unwrap_or(defaults.bind),
            api_key: env::var("ZENJOURNEY_API_KEY")
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.api_key),
            advisor_timeout: parse_var::<u64>("ZENJOURNEY_ADVISOR_TIMEOUT_MS")
                .filter(|millis| *millis > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.advisor_timeout),
            rate_limit_window: parse_var::<u64>("ZENJOURNEY_API_RATE_LIMIT_WINDOW_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            rate_limit_max: parse_var("ZENJOURNEY_API_RATE_LIMIT_MAX")
                .unwrap_or(defaults.rate_limit_max),
            allowed_origins: env::var("ZENJOURNEY_ALLOWED_ORIGINS")
                .ok()
                .map(|value| parse_origins(&value))
                .unwrap_or(defaults.allowed_origins),
            trust_forwarded_for: parse_var("ZENJOURNEY_TRUST_FORWARDED_FOR")
                .unwrap_or(defaults.trust_forwarded_for),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
