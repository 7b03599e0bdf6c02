//! HTTP client for the is.gd / v.gd shortening API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{Service, ShortenerConfig},
    decode::decode_forwarded_url,
    query::{LookupQuery, Query, ShortenQuery},
    types::{CreatedUrl, Envelope, ForwardedUrl, ShortenResult},
    Error, ServiceError,
};

/// HTTP client for the .gd shortening services.
///
/// Holds only its configuration, so one instance can serve concurrent calls.
/// Each request builds a fresh `reqwest::Client` with the configured user
/// agent and timeout, and every call performs exactly one GET with no retries.
#[derive(Debug, Clone, Default)]
pub struct Client {
    config: ShortenerConfig,
}

impl Client {
    pub fn new(config: ShortenerConfig) -> Self {
        Self { config }
    }

    /// Creates a client for the given service with default timeout and user agent.
    pub fn for_service(service: Service) -> Self {
        Self::new(ShortenerConfig::for_service(service))
    }

    pub fn is_gd() -> Self {
        Self::for_service(Service::IsGd)
    }

    pub fn v_gd() -> Self {
        Self::for_service(Service::VGd)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ShortenerConfig::default().with_base_url(base_url))
    }

    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let base = self.config.base_url.trim_end_matches('/');
        let url = Url::parse(format!("{}{}", base, query.endpoint()).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed from base {:?}: {}", base, e);
            Error::InvalidBaseUrl(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(query)?;
        let client = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;

        tracing::debug!(endpoint = query.endpoint(), host = url.host_str(), "Sending request");
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request to {} failed: {}", query.endpoint(), e);
                Error::Transport(e)
            })?;

        // The service reports its error codes in the body, sometimes alongside
        // a non-success status, so the body is inspected before the status.
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        let envelope = match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                let snippet = truncate_body(&body);
                if !status.is_success() {
                    tracing::error!("Request failed with status {}: {}", status, snippet);
                    return Err(Error::HttpStatus {
                        status: status.as_u16(),
                        body: snippet,
                    });
                }
                tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
                return Err(Error::Decode(format!("{} | body: {}", e, snippet)));
            }
        };

        envelope.into_result().map_err(|e| {
            tracing::warn!("{} returned an error: {}", query.endpoint(), e);
            e
        })
    }

    /// Shortens `query.long_url`.
    ///
    /// A blank long URL fails with `MalformedUrl` before any request is sent.
    /// A blank custom alias is dropped. When `log_stats` is set, the result
    /// also carries the statistics page URL.
    pub async fn shorten(&self, query: &ShortenQuery) -> Result<ShortenResult, Error> {
        if query.long_url.trim().is_empty() {
            return Err(ServiceError::malformed_url(
                "the URL that had to be shortened must be a non empty string",
            )
            .into());
        }
        let created = self.get::<CreatedUrl, ShortenQuery>(query).await?;
        Ok(ShortenResult::new(
            &self.config.base_url,
            created.shorturl,
            query.log_stats,
        ))
    }

    /// Shortens `long_url` without a custom alias or statistics.
    pub async fn shorten_url(&self, long_url: &str) -> Result<ShortenResult, Error> {
        self.shorten(&ShortenQuery::new(long_url)).await
    }

    /// Resolves a short URL to the original URL, fully decoded.
    ///
    /// A blank short URL fails with `MalformedUrl` before any request is sent.
    pub async fn lookup(&self, short_url: &str) -> Result<String, Error> {
        if short_url.trim().is_empty() {
            return Err(
                ServiceError::malformed_url("the shortened URL must be a non empty string").into(),
            );
        }
        let forwarded = self
            .get::<ForwardedUrl, LookupQuery>(&LookupQuery::new(short_url))
            .await?;
        Ok(decode_forwarded_url(&forwarded.url))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
