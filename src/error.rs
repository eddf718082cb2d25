//! Error handling for gdfetch.
//!
//! Every failure the tool can report is a variant of [`Error`]. None of them
//! is retried: each one ends the current operation and is surfaced once to
//! the entry point, which decides how to print it and which exit status to
//! use (see [`Error::exit_code`]).

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen when fetching a shared file.
#[derive(Error, Debug)]
pub enum Error {
    /// A token on the command line is not part of a `-key value` pair, or the
    /// flag parser rejected the invocation.
    #[error("{0}")]
    MalformedArguments(String),

    /// The share-link is missing or does not look like
    /// `https://drive.google.com/file/d/<33 character id>`.
    #[error(
        "The URL is not given or not in correct format. Ensure that the url is like \
         https://drive.google.com/file/d/<file ID as 33 characters>/view?usp=drive_link \
         (got \"{0}\")"
    )]
    InvalidUrlFormat(String),

    /// The `-mode` value is neither `show` nor `download`.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// The remote service answered with anything but `200 OK`.
    #[error("Got an unusual response. Status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    /// The `Content-Length` header is absent or not a non-negative integer.
    #[error("Something went wrong during parsing Content-Length header: {0}")]
    MissingOrMalformedSize(String),

    /// The `Content-Disposition` header is absent or carries no usable
    /// filename.
    #[error("Something went wrong during parsing Content-Disposition header: {0}")]
    MissingOrMalformedFilename(String),

    /// Creating the destination file or copying the body into it failed.
    #[error("Transfer failed: {source}")]
    Transfer { source: io::Error },

    /// The request could not be sent or no response was received.
    #[error("Request failed: {source}")]
    Request {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Terminal interaction failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O failure that happened while writing the destination file.
    pub fn transfer(source: io::Error) -> Self {
        Error::Transfer { source }
    }

    /// Returns `true` for invocation mistakes that should be followed by the
    /// usage text.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MalformedArguments(_) | Error::InvalidUrlFormat(_) | Error::UnknownMode(_)
        )
    }

    /// Process exit status for this error.
    ///
    /// | kind                         | code |
    /// |------------------------------|------|
    /// | invocation mistakes          | 1    |
    /// | request / unexpected status  | 3    |
    /// | header parsing               | 4    |
    /// | transfer                     | 5    |
    /// | terminal I/O                 | 6    |
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MalformedArguments(_) | Error::InvalidUrlFormat(_) | Error::UnknownMode(_) => 1,
            Error::UnexpectedStatus(_) | Error::Request { .. } => 3,
            Error::MissingOrMalformedSize(_) | Error::MissingOrMalformedFilename(_) => 4,
            Error::Transfer { .. } => 5,
            Error::Io { .. } => 6,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Request {
            source: reqwest_middleware::Error::Reqwest(source),
        }
    }
}

/// Result type alias for operations that can fail with a gdfetch error.
pub type Result<T> = std::result::Result<T, Error>;
