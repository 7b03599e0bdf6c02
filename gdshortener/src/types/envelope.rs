//! JSON bodies returned by `create.php` and `forward.php`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{Error, ServiceError, ServiceErrorKind};

/// Either the endpoint's success payload or the shared error payload.
/// A body carrying the success field is treated as a success even if it
/// also carries error fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(T),
    Failure(ErrorPayload),
}

/// Success body of `create.php`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedUrl {
    pub shorturl: String,
}

/// Success body of `forward.php`. The URL may be percent-encoded and
/// HTML-escaped.
#[derive(Debug, Serialize, Deserialize)]
pub struct ForwardedUrl {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Accepted as a JSON number or a numeric string.
    #[serde(deserialize_with = "deserialize_code")]
    pub errorcode: i64,
    pub errormessage: String,
}

impl<T> Envelope<T> {
    /// Converts the payload into the success value or the matching typed error.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(payload) => Err(payload.into_error()),
        }
    }
}

impl ErrorPayload {
    pub fn into_error(self) -> Error {
        match ServiceErrorKind::from_code(self.errorcode) {
            Some(kind) => ServiceError::new(kind, self.errormessage).into(),
            None => Error::Decode(format!(
                "unrecognized service error code {}: {}",
                self.errorcode, self.errormessage
            )),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(i64),
    Text(String),
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCode::deserialize(deserializer)? {
        RawCode::Number(code) => Ok(code),
        RawCode::Text(code) => code.trim().parse().map_err(serde::de::Error::custom),
    }
}
