use url::Url;

use super::{common::FORMAT_JSON, Query};

/// Parameters for `create.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenQuery {
    pub long_url: String,
    pub custom_alias: Option<String>,
    /// Ask the service to record usage statistics. Stats-enabled URLs count
    /// double against the service's rate limit.
    pub log_stats: bool,
}

impl Query for ShortenQuery {
    fn endpoint(&self) -> &'static str {
        "/create.php"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(FORMAT_JSON.0, FORMAT_JSON.1)
            .append_pair("url", &self.long_url)
            .append_pair("logstats", if self.log_stats { "1" } else { "0" });
        if let Some(alias) = self.alias() {
            url.query_pairs_mut().append_pair("shorturl", alias);
        }
        url
    }
}

impl ShortenQuery {
    pub fn new(long_url: &str) -> Self {
        Self {
            long_url: long_url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_custom_alias(mut self, alias: &str) -> Self {
        self.custom_alias = Some(alias.to_string());
        self
    }

    pub fn with_log_stats(mut self, log_stats: bool) -> Self {
        self.log_stats = log_stats;
        self
    }

    /// The custom alias to send, if any. Blank aliases are treated as absent.
    pub fn alias(&self) -> Option<&str> {
        self.custom_alias
            .as_deref()
            .filter(|alias| !alias.trim().is_empty())
    }
}
