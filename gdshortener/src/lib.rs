//! Client for the is.gd and v.gd URL shortening services.
//!
//! [`Client::shorten`] turns a long URL into a short one, optionally with a
//! custom alias and a statistics page; [`Client::lookup`] resolves a short
//! URL back to the original. Service failures surface as [`Error::Service`]
//! carrying one of the four [`ServiceErrorKind`]s.

mod client;
pub mod config;
mod decode;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::{Service, ShortenerConfig};
pub use self::decode::decode_forwarded_url;
pub use self::errors::{Error, ServiceError, ServiceErrorKind};
pub use self::query::{LookupQuery, Query, ShortenQuery};
pub use self::types::ShortenResult;
