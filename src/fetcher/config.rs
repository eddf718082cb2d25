//! Configuration structures and defaults for the fetcher.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::fetcher::FetcherConfig;
//!
//! let config = FetcherConfig::default();
//! assert_eq!(config.endpoint.as_str(), "https://drive.google.com/uc");
//! assert!(config.http.timeout.is_none());
//! ```

use crate::http::HttpClientConfig;
use crate::progress::{ProgressBarOpts, SharedObserver};
use crate::share::DOWNLOAD_ENDPOINT;

use reqwest::Url;
use std::fmt;
use std::path::PathBuf;

/// Configuration structure for the fetcher.
#[derive(Clone)]
pub struct FetcherConfig {
    /// Directory relative output names are resolved against. Empty means the
    /// current working directory.
    pub directory: PathBuf,
    /// Endpoint the direct-download URL is built on.
    pub endpoint: Url,
    /// HTTP client options.
    pub http: HttpClientConfig,
    /// Transfer progress bar options.
    pub progress: ProgressBarOpts,
    /// Receives transfer progress instead of the progress bar.
    pub observer: Option<SharedObserver>,
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("directory", &self.directory)
            .field("endpoint", &self.endpoint)
            .field("http", &self.http)
            .field("progress", &self.progress)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            endpoint: Url::parse(DOWNLOAD_ENDPOINT).expect("download endpoint is a valid URL"),
            http: HttpClientConfig::default(),
            progress: ProgressBarOpts::default(),
            observer: None,
        }
    }
}
