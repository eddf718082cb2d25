//! Content length extraction utilities.
//!
//! The declared size drives both the confirmation prompt and the copy
//! limit, so unlike a generic downloader there is no fallback: a missing or
//! unparsable `Content-Length` header is an error.

use crate::error::{Error, Result};

use reqwest::header::{HeaderMap, CONTENT_LENGTH};

/// Parse a `Content-Length` header value.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// `u64` is rejected.
///
/// # Example
///
/// ```rust
/// use gdfetch::utils::parse_content_length;
///
/// assert_eq!(parse_content_length(" 2048 "), Some(2048));
/// assert_eq!(parse_content_length("-1"), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    let value = value.trim();
    // `u64::from_str` accepts a leading `+`, the header grammar does not.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok()
}

/// Extract the declared body size from a header map.
///
/// # Errors
///
/// [`Error::MissingOrMalformedSize`] when the header is absent, not valid
/// ASCII, or not a non-negative integer.
pub fn content_length(headers: &HeaderMap) -> Result<u64> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or_else(|| Error::MissingOrMalformedSize("header is missing".into()))?;
    let value = value
        .to_str()
        .map_err(|e| Error::MissingOrMalformedSize(e.to_string()))?;
    parse_content_length(value)
        .ok_or_else(|| Error::MissingOrMalformedSize(format!("invalid value \"{}\"", value)))
}
