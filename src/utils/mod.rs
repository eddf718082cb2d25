//! Response header parsing.
//!
//! - [`content_length`] - declared body size from `Content-Length`
//! - [`disposition`] - remote file name from `Content-Disposition`
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::utils::{parse_content_length, parse_disposition, FilenameForm};
//!
//! assert_eq!(parse_content_length("123456"), Some(123456));
//!
//! let (name, form) = parse_disposition("attachment; filename*=UTF-8''report.pdf").unwrap();
//! assert_eq!(name, "report.pdf");
//! assert_eq!(form, FilenameForm::Extended);
//! ```

pub mod content_length;
pub mod disposition;

pub use content_length::{content_length, parse_content_length};
pub use disposition::{filename, parse_disposition, percent_decode, sanitize_filename, FilenameForm};
