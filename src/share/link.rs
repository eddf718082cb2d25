//! Share-link validation and direct-download URL construction.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::share::ShareLink;
//!
//! let link = ShareLink::parse(
//!     "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=drive_link",
//! )?;
//! assert_eq!(link.id(), "1AbCdEfGhIjKlMnOpQrStUvWxYz012345");
//! assert_eq!(
//!     link.download_url().as_str(),
//!     "https://drive.google.com/uc?export=download&confirm=yes&id=1AbCdEfGhIjKlMnOpQrStUvWxYz012345",
//! );
//! # Ok::<(), gdfetch::Error>(())
//! ```

use crate::error::{Error, Result};

use regex::Regex;
use reqwest::Url;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Length of a Drive file identifier.
pub const ID_LEN: usize = 33;

/// Endpoint serving the raw bytes of a shared file.
pub const DOWNLOAD_ENDPOINT: &str = "https://drive.google.com/uc";

static SHARE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://drive\.google\.com/file/d/([A-Za-z0-9_-]{33})(?:[/?#]|$)")
        .expect("share-link pattern is valid")
});

/// A validated share-link.
///
/// The only way to obtain one is through [`ShareLink::parse`], so holding a
/// `ShareLink` means the identifier is exactly [`ID_LEN`] URL-safe
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    id: String,
}

impl ShareLink {
    /// Validates `value` and extracts the file identifier.
    ///
    /// Only the prefix is checked: anything after the identifier (such as
    /// `/view?usp=sharing`) is accepted as is.
    pub fn parse(value: &str) -> Result<Self> {
        SHARE_LINK
            .captures(value)
            .and_then(|caps| caps.get(1))
            .map(|id| ShareLink {
                id: id.as_str().to_string(),
            })
            .ok_or_else(|| Error::InvalidUrlFormat(value.to_string()))
    }

    /// The file identifier embedded in the link.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Direct-download URL on the public endpoint.
    pub fn download_url(&self) -> Url {
        // The constant always parses.
        let endpoint = Url::parse(DOWNLOAD_ENDPOINT).expect("download endpoint is a valid URL");
        self.download_url_with(&endpoint)
    }

    /// Direct-download URL rooted at `endpoint`.
    ///
    /// The `confirm` value is not checked by the service; any value skips the
    /// "can't scan this file for viruses" interstitial.
    pub fn download_url_with(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("export", "download")
            .append_pair("confirm", "yes")
            .append_pair("id", &self.id);
        url
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://drive.google.com/file/d/{}", self.id)
    }
}

impl FromStr for ShareLink {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShareLink::parse(s)
    }
}

impl TryFrom<&str> for ShareLink {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        ShareLink::parse(value)
    }
}
