//! Shared query infrastructure: the [`Query`] trait and the response format parameter.

use url::Url;

/// Every request asks for a JSON body.
pub(crate) const FORMAT_JSON: (&str, &str) = ("format", "json");

/// Trait implemented by all query builders. Each query targets one service
/// endpoint and serializes its parameters onto that endpoint's URL.
pub trait Query {
    /// Endpoint path relative to the service base URL, e.g. `/create.php`.
    fn endpoint(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
