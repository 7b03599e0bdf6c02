//! Decoding of the original URL returned by `forward.php`.

use percent_encoding::percent_decode_str;

/// Percent-decodes `raw`, then unescapes HTML entities such as `&amp;`.
///
/// The service may return the URL encoded both ways, so the order matters:
/// `%26amp%3B` must first become `&amp;` and only then `&`. A `+` is kept
/// as is. Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn decode_forwarded_url(raw: &str) -> String {
    let unquoted = percent_decode_str(raw).decode_utf8_lossy();
    html_escape::decode_html_entities(&*unquoted).into_owned()
}
