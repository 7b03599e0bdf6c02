mod envelope;
pub use self::envelope::{CreatedUrl, Envelope, ErrorPayload, ForwardedUrl};

mod shortened;
pub use self::shortened::ShortenResult;
