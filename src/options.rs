//! Validated invocation options.

use crate::error::{Error, Result};
use crate::share::ShareLink;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// What to do with the shared file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the file's name and size.
    Show,
    /// Save the file to disk.
    #[default]
    Download,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "show" => Ok(Mode::Show),
            "download" => Ok(Mode::Download),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Show => "show",
            Mode::Download => "download",
        })
    }
}

/// Options for one run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Operation to perform.
    pub mode: Mode,
    /// Skip the confirmation prompt.
    pub skip_confirmation: bool,
    /// The validated share-link.
    pub link: ShareLink,
    /// Destination file name; the remote name is used when absent.
    pub output: Option<PathBuf>,
    /// Whole-request timeout.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Options for downloading `link` under its remote name, with
    /// confirmation.
    pub fn new(mode: Mode, link: ShareLink) -> Self {
        Self {
            mode,
            skip_confirmation: false,
            link,
            output: None,
            timeout: None,
        }
    }
}
