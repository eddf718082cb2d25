//! `Content-Disposition` filename extraction.
//!
//! Drive has been observed sending both
//!
//! ```text
//! attachment; filename="report.pdf"; filename*=UTF-8''report.pdf
//! attachment; filename*=UTF-8''r%C3%A9sum%C3%A9.pdf
//! ```
//!
//! The extended (RFC 5987) parameter carries the exact UTF-8 name, so it wins
//! whenever it is present. The plain parameter is the fallback.

use crate::error::{Error, Result};

use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static EXTENDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)filename\*\s*=\s*UTF-8'[^']*'([^;]+)").expect("extended filename pattern")
});

static MALFORMED_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:[^0-9A-Fa-f]|[0-9A-Fa-f](?:[^0-9A-Fa-f]|$)|$)").expect("escape pattern")
});

static PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|;)\s*filename\s*=\s*(?:"([^"]*)"|([^;\s]+))"#)
        .expect("plain filename pattern")
});

/// Which `filename` parameter a name was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameForm {
    /// `filename*=UTF-8''<percent-encoded>`
    Extended,
    /// `filename="<name>"` or `filename=<token>`
    Plain,
}

/// Decode a percent-encoded value the way a query string is decoded: `%XX`
/// escapes become bytes and `+` becomes a space.
///
/// Returns `None` for a truncated or non-hex escape, or when the decoded
/// bytes are not UTF-8.
pub fn percent_decode(raw: &str) -> Option<String> {
    if MALFORMED_ESCAPE.is_match(raw) {
        return None;
    }
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Extract the filename from a `Content-Disposition` header value.
pub fn parse_disposition(value: &str) -> Option<(String, FilenameForm)> {
    if let Some(raw) = EXTENDED.captures(value).and_then(|c| c.get(1)) {
        return percent_decode(raw.as_str().trim())
            .map(|name| (name.trim().to_string(), FilenameForm::Extended));
    }

    PLAIN
        .captures(value)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| (m.as_str().trim().to_string(), FilenameForm::Plain))
}

/// Reduce a server-supplied name to a bare file name.
///
/// Separators of either platform are stripped so the name can never point
/// outside the destination directory.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let last = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    match Path::new(last).file_name() {
        Some(f) if f == last => Some(last.to_string()),
        _ => None,
    }
}

/// Extract the remote filename from a header map.
///
/// # Errors
///
/// [`Error::MissingOrMalformedFilename`] when the header is missing, holds
/// no `filename` parameter, cannot be decoded, or names no file.
pub fn filename(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(CONTENT_DISPOSITION)
        .ok_or_else(|| Error::MissingOrMalformedFilename("header is missing".into()))?;
    let value = value
        .to_str()
        .map_err(|e| Error::MissingOrMalformedFilename(e.to_string()))?;
    let (name, form) = parse_disposition(value).ok_or_else(|| {
        Error::MissingOrMalformedFilename(format!("no usable filename in \"{}\"", value))
    })?;
    debug!("Filename {:?} from the {:?} parameter", name, form);
    sanitize_filename(&name).ok_or_else(|| {
        Error::MissingOrMalformedFilename(format!("\"{}\" is not a file name", name))
    })
}
