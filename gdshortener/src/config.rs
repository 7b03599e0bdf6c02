//! Client configuration: target service, timeout and user agent.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Base URL of the is.gd service.
pub const IS_GD_URL: &str = "http://is.gd";
/// Base URL of the v.gd service.
pub const V_GD_URL: &str = "http://v.gd";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; GD Shortener Rust Module - https://github.com/torre76/gd_shortener/)";

pub const ENV_SERVICE: &str = "GDSHORTENER_SERVICE";
pub const ENV_BASE_URL: &str = "GDSHORTENER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "GDSHORTENER_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "GDSHORTENER_USER_AGENT";

/// The two known .gd shortening services. They share the same API and
/// differ only in base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    #[default]
    IsGd,
    VGd,
}

impl Service {
    pub fn base_url(self) -> &'static str {
        match self {
            Service::IsGd => IS_GD_URL,
            Service::VGd => V_GD_URL,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Service::IsGd => "is.gd",
                Service::VGd => "v.gd",
            }
        )
    }
}

impl FromStr for Service {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "is.gd" | "isgd" | "is" => Ok(Service::IsGd),
            "v.gd" | "vgd" | "v" => Ok(Service::VGd),
            _ => Err(()),
        }
    }
}

/// Settings for a [`Client`](crate::Client). Stored verbatim; nothing is
/// validated until a request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    /// Base URL of the service, e.g. `http://is.gd`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self::for_service(Service::default())
    }
}

impl ShortenerConfig {
    /// Default settings targeting the given service.
    pub fn for_service(service: Service) -> Self {
        Self {
            base_url: service.base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn is_gd() -> Self {
        Self::for_service(Service::IsGd)
    }

    pub fn v_gd() -> Self {
        Self::for_service(Service::VGd)
    }

    /// Points the client at a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Builds a config from `GDSHORTENER_*` environment variables, loading a
    /// `.env` file first if one exists. Unset or unparsable values keep their
    /// defaults.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but resolves variables through
    /// `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service = match lookup(ENV_SERVICE) {
            Some(raw) => raw.parse::<Service>().unwrap_or_else(|_| {
                tracing::warn!("Unknown {} value {:?}, using {}", ENV_SERVICE, raw, Service::default());
                Service::default()
            }),
            None => Service::default(),
        };
        let mut config = Self::for_service(service);

        if let Some(base_url) = non_empty(lookup(ENV_BASE_URL)) {
            config.base_url = base_url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = non_empty(lookup(ENV_USER_AGENT)) {
            config.user_agent = user_agent;
        }
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
