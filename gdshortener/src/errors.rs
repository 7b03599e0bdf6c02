//! Error types for the shortener client.

use std::fmt;

/// Failure categories reported by the .gd services in the `errorcode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The long URL (or the short URL on lookup) is malformed.
    MalformedUrl = 1,
    /// The custom alias is unavailable, or the short URL has been disabled.
    ShortUrlRejected = 2,
    /// The request rate allowance was exceeded. Callers should back off.
    RateLimited = 3,
    /// Any other failure, e.g. a maintenance period.
    Generic = 4,
}

impl ServiceErrorKind {
    /// Numeric code used by the service for this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Maps a service error code to its kind. Returns `None` for codes the
    /// service does not define.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ServiceErrorKind::MalformedUrl),
            2 => Some(ServiceErrorKind::ShortUrlRejected),
            3 => Some(ServiceErrorKind::RateLimited),
            4 => Some(ServiceErrorKind::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ServiceErrorKind::MalformedUrl => "malformed URL",
                ServiceErrorKind::ShortUrlRejected => "short URL rejected",
                ServiceErrorKind::RateLimited => "rate limited",
                ServiceErrorKind::Generic => "generic service error",
            }
        )
    }
}

/// An error reported by the service, or an input rejected before sending.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Error code: [{}] - Error description: [{}]", .kind.code(), .description)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub description: String,
}

impl ServiceError {
    pub fn new(kind: ServiceErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    pub fn malformed_url(description: impl Into<String>) -> Self {
        Self::new(ServiceErrorKind::MalformedUrl, description)
    }

    /// Numeric code, always consistent with `kind`.
    pub fn code(&self) -> u8 {
        self.kind.code()
    }
}

/// Errors that can occur when calling the shortener.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The service (or local validation) rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// The HTTP round trip failed: timeout, connection refused, TLS, etc.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The configured base URL could not be turned into an endpoint URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// Non-success status whose body carried no recognizable payload.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not JSON or matched neither the success nor the error shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Kind of the service error, if this is one.
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Error::Service(e) => Some(e.kind),
            _ => None,
        }
    }

    /// Service error code, if this is a service error.
    pub fn code(&self) -> Option<u8> {
        self.service_kind().map(ServiceErrorKind::code)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}
