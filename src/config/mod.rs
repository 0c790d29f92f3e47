use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 6;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub max_tickets_per_purchase: u32,
    pub request_timeout: Duration,
    /// Path of the file-backed session store used by the smoke driver.
    pub session_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            max_tickets_per_purchase: parse_or_default(
                "MAX_TICKETS_PER_PURCHASE",
                DEFAULT_MAX_TICKETS_PER_PURCHASE,
            ),
            request_timeout: Duration::from_secs(parse_or_default(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            session_file: env::var("SESSION_FILE").ok().map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            session_file: None,
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {} value '{}', using default", var, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cap_purchases_at_six() {
        let config = Config::default();
        assert_eq!(config.max_tickets_per_purchase, 6);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
