//! Download data types.
//!
//! This module contains the values that flow through a fetch: the
//! [`FileMetadata`] read from the response headers, the [`Confirm`] prompt
//! consulted before writing, and the [`Outcome`] handed back to the caller.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::download::FileMetadata;
//! use reqwest::header::{HeaderMap, HeaderValue, CONTENT_DISPOSITION, CONTENT_LENGTH};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_LENGTH, HeaderValue::from_static("123456"));
//! headers.insert(
//!     CONTENT_DISPOSITION,
//!     HeaderValue::from_static("attachment; filename*=UTF-8''report.pdf"),
//! );
//!
//! let metadata = FileMetadata::from_headers(&headers)?;
//! assert_eq!(metadata, FileMetadata::new(123456, "report.pdf"));
//! # Ok::<(), gdfetch::Error>(())
//! ```

pub mod metadata;
pub mod outcome;
pub mod prompt;

pub use metadata::FileMetadata;
pub use outcome::Outcome;
pub use prompt::{is_declined, Confirm, LinePrompt, DECLINE};
