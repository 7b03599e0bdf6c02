use serde::{Deserialize, Serialize};

/// Outcome of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResult {
    /// The short URL issued by the service.
    pub short_url: String,
    /// Statistics page for the short URL. Only set when stats logging was requested.
    pub stats_url: Option<String>,
}

impl ShortenResult {
    /// Builds the result for `short_url` issued by the service at `base_url`.
    /// The stats page is keyed by the alias, i.e. whatever follows the last `/`.
    pub(crate) fn new(base_url: &str, short_url: String, log_stats: bool) -> Self {
        let stats_url = log_stats.then(|| {
            let alias = short_url.rsplit('/').next().unwrap_or(&short_url);
            format!("{}/stats.php?url={}", base_url.trim_end_matches('/'), alias)
        });
        Self {
            short_url,
            stats_url,
        }
    }

    /// The alias part of the short URL.
    pub fn alias(&self) -> &str {
        self.short_url.rsplit('/').next().unwrap_or(&self.short_url)
    }
}
