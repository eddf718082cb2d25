//! gdfetch downloads files shared publicly on Google Drive.
//!
//! A share-link (`https://drive.google.com/file/d/<id>/view`) opens a
//! preview page. gdfetch turns it into a direct-download URL, reads the
//! file's name and size from the response headers, and either reports them
//! or streams the file to disk behind a progress bar.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gdfetch::{FetcherBuilder, LinePrompt, Outcome, ShareLink};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gdfetch::Error> {
//! let link = ShareLink::parse(
//!     "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view?usp=sharing",
//! )?;
//! let fetcher = FetcherBuilder::new().build()?;
//! let mut prompt = LinePrompt::stdio();
//! match fetcher.download(&link, None, false, &mut prompt).await? {
//!     Outcome::Downloaded { path, bytes } => println!("{} bytes in {}", bytes, path.display()),
//!     Outcome::Aborted => println!("Abort."),
//!     Outcome::Shown(_) => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`share`] - share-link validation and direct-download URLs
//! - [`utils`] - `Content-Length` and `Content-Disposition` parsing
//! - [`download`] - file metadata, confirmation prompt and run outcome
//! - [`fetcher`] - the [`Fetcher`], its builder and the body copy
//! - [`progress`] - progress bar styling and the observing stream
//! - [`http`] - HTTP client construction
//! - [`cli`] - command-line parsing and the program entry point
//! - [`error`] - the [`Error`] enum

pub mod cli;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod options;
pub mod progress;
pub mod share;
pub mod utils;

pub use download::{Confirm, FileMetadata, LinePrompt, Outcome};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder, FetcherConfig};
pub use http::{create_http_client, HttpClientConfig};
pub use options::{Mode, RequestOptions};
pub use progress::{ProgressBarOpts, ProgressObserver, ProgressStream};
pub use share::ShareLink;
