//! URL modeling: request URL assembly and query-string encoding.
//!
//! Everything here is pure: no I/O, no shared state. Config and logging are
//! the caller's business.

mod build;
mod error;
mod query;
mod variables;

pub use build::{
    build_url, build_url_with, default_port, BuildOptions, UrlParts, DEFAULT_HOST, DEFAULT_SCHEME,
};
pub use error::UrlError;
pub use query::{decode_query_string, encode_query_string};
pub use variables::{IntoVariableValue, QueryOrder, VariableMap};

/// Re-exported so callers need not depend on `url` directly.
pub use url::Url;
