//! Share-link resolution.
//!
//! A share-link is what Drive gives out under "Share" => "Copy link". It
//! renders an HTML preview page, so it has to be turned into a
//! direct-download URL before the file content and its headers can be
//! requested.

pub mod link;

pub use link::{ShareLink, DOWNLOAD_ENDPOINT, ID_LEN};
