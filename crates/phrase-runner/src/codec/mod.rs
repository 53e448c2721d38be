pub mod url_safe;

pub use url_safe::{decode, encode, UrlSafeDecodeError};
