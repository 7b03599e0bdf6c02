use url::Url;

use super::{common::FORMAT_JSON, Query};

/// Parameters for `forward.php`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    pub short_url: String,
}

impl Query for LookupQuery {
    fn endpoint(&self) -> &'static str {
        "/forward.php"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(FORMAT_JSON.0, FORMAT_JSON.1)
            .append_pair("shorturl", &self.short_url);
        url
    }
}

impl LookupQuery {
    pub fn new(short_url: &str) -> Self {
        Self {
            short_url: short_url.to_string(),
        }
    }
}
