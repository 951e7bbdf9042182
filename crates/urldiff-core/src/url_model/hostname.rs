//! Textual hostname extraction.

use thiserror::Error;

/// The URL could not be parsed as having a conventional host segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse hostname from {url:?}")]
pub struct HostnameParseError {
    pub url: String,
}

const SCHEME_DELIM: &str = "://";

/// Extracts the host segment of a normalized URL.
///
/// The host starts after `://` when a scheme is present; without one the
/// host starts at the first character, which must then be alphanumeric.
/// It runs to the first `/`, or to the end of the string when the URL has
/// no path. A leading `://` is an empty scheme, not a scheme, and is
/// rejected like any other non-host-like start.
pub fn extract_hostname(url: &str) -> Result<&str, HostnameParseError> {
    let start = match url.find(SCHEME_DELIM) {
        Some(idx) if idx > 0 => idx + SCHEME_DELIM.len(),
        _ => {
            let host_like = url.chars().next().map_or(false, char::is_alphanumeric);
            if !host_like {
                tracing::error!("unable to parse hostname from {:?}", url);
                return Err(HostnameParseError {
                    url: url.to_string(),
                });
            }
            0
        }
    };
    let rest = &url[start..];
    let end = rest.find('/').unwrap_or(rest.len());
    Ok(&rest[..end])
}
