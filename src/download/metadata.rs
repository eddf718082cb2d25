//! File metadata announced by the download endpoint.

use crate::error::Result;
use crate::utils::{content_length, filename};

use indicatif::HumanBytes;
use reqwest::header::HeaderMap;
use std::fmt;

/// Size and name of a shared file, as announced in the response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Declared size in bytes (`Content-Length`).
    pub size: u64,
    /// Name the owner gave the file (`Content-Disposition`).
    pub filename: String,
}

impl FileMetadata {
    /// Creates a new [`FileMetadata`].
    pub fn new(size: u64, filename: &str) -> Self {
        Self {
            size,
            filename: String::from(filename),
        }
    }

    /// Extracts the metadata from a response header map.
    ///
    /// The size is checked first, so a response missing both headers reports
    /// [`Error::MissingOrMalformedSize`](crate::Error::MissingOrMalformedSize).
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let size = content_length(headers)?;
        let filename = filename(headers)?;
        Ok(Self { size, filename })
    }

    /// Size in binary units, e.g. `1.50 MiB`.
    pub fn human_size(&self) -> String {
        HumanBytes(self.size).to_string()
    }

    /// Multi-line report printed in show mode.
    pub fn report(&self) -> String {
        format!(
            "[Information of the file]\nfilename: {}\nfilesize: {}\n",
            self.filename,
            self.human_size()
        )
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.filename, self.human_size())
    }
}
