//! Terminal result of one invocation.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::download::{FileMetadata, Outcome};
//!
//! let outcome = Outcome::Shown(FileMetadata::new(42, "notes.txt"));
//! assert_eq!(outcome.exit_code(), 0);
//! assert!(outcome.message().is_none());
//! ```

use super::metadata::FileMetadata;

use std::path::PathBuf;

/// What happened during a successful run.
///
/// Returned all the way up to `main`, which is the only place that decides
/// how the process ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Metadata was retrieved and reported (show mode).
    Shown(FileMetadata),
    /// The file was written to disk.
    Downloaded {
        /// Destination path.
        path: PathBuf,
        /// Bytes written, equal to the declared size.
        bytes: u64,
    },
    /// The user declined the confirmation prompt. Nothing was written.
    Aborted,
}

impl Outcome {
    /// Process exit status; every outcome is a success, including an abort.
    pub fn exit_code(&self) -> i32 {
        0
    }

    /// Line to print for the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Aborted => Some("Abort."),
            _ => None,
        }
    }

    /// `true` if the user declined the download.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_is_success() {
        let outcome = Outcome::Aborted;
        assert!(outcome.is_aborted());
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(outcome.message(), Some("Abort."));
    }

    #[test]
    fn test_downloaded() {
        let outcome = Outcome::Downloaded {
            path: PathBuf::from("custom.bin"),
            bytes: 10,
        };
        assert!(!outcome.is_aborted());
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.message().is_none());
    }
}
