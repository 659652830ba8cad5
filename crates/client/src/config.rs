use std::path::PathBuf;
use std::time::Duration;

use masjid_core::pagination::{clamp_limit, DEFAULT_PAGE_SIZE};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin (default: `http://localhost:5000`).
    pub api_base_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Rows per list page (default: `10`).
    pub page_size: u32,
    /// Where the persisted session is read from (default: `session.json`).
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".into(),
            request_timeout_secs: 30,
            page_size: DEFAULT_PAGE_SIZE,
            session_file: PathBuf::from("session.json"),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `API_BASE_URL`         | `http://localhost:5000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `PAGE_SIZE`            | `10`                    |
    /// | `SESSION_FILE`         | `session.json`          |
    ///
    /// Values that fail to parse are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            defaults.request_timeout_secs,
        );

        let page_size = clamp_limit(parse_or("PAGE_SIZE", lookup("PAGE_SIZE"), defaults.page_size));

        let session_file = lookup("SESSION_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        Self {
            api_base_url,
            request_timeout_secs,
            page_size,
            session_file,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "Invalid config value, using default");
            default
        }),
    }
}
