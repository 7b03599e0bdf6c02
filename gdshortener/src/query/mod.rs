mod common;
pub use self::common::Query;

mod shorten;
pub use self::shorten::ShortenQuery;

mod lookup;
pub use self::lookup::LookupQuery;
