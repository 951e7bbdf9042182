//! URL text operations: normalization, hostname extraction, and
//! query-parameter extraction.
//!
//! Comparison is byte-literal: no percent-decoding, no case folding, and no
//! well-formedness checks beyond the delimiters the diff needs.

mod hostname;
mod normalize;
mod params;

pub use hostname::{extract_hostname, HostnameParseError};
pub use normalize::normalize_url;
pub use params::{extract_params, ParamMap};
