//! Builder for [`Fetcher`] instances.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::fetcher::FetcherBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), gdfetch::Error> {
//! let fetcher = FetcherBuilder::new()
//!     .directory("downloads".into())
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use gdfetch::fetcher::FetcherBuilder;
//!
//! # fn example() -> Result<(), gdfetch::Error> {
//! let fetcher = FetcherBuilder::hidden().build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::error::Result;
use crate::http::create_http_client;
use crate::progress::{ProgressBarOpts, ProgressObserver};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::{Proxy, Url};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Fetcher`].
#[derive(Debug, Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bar.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.progress = ProgressBarOpts::hidden();
        builder
    }

    /// Sets the directory output names are resolved against.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Sets the endpoint the direct-download URL is built on.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.config.endpoint = endpoint;
        self
    }

    /// Sets the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.connect_timeout = Some(timeout);
        self
    }

    /// Sends every request through `proxy`.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Set the progress bar options.
    pub fn progress(mut self, progress: ProgressBarOpts) -> Self {
        self.config.progress = progress;
        self
    }

    /// Report transfer progress to `observer` instead of drawing a bar.
    ///
    /// The bar options set through [`progress`](Self::progress) are then
    /// ignored.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: ProgressObserver + Send + Sync + 'static,
    {
        self.config.observer = Some(Arc::new(observer));
        self
    }

    /// Add the http headers.
    ///
    /// Calling `.headers()` several times merges all maps into one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.config.http.headers.take().unwrap_or_default();
        new.extend(headers);
        self.config.http.headers = Some(new);
        self
    }

    /// Add a single http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.config.http.headers.take().unwrap_or_default();
        new.insert(name, value);
        self.config.http.headers = Some(new);
        self
    }

    /// Get a reference to the configuration built so far.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Create the [`Fetcher`] with the specified options.
    ///
    /// Fails if the HTTP client cannot be initialised, e.g. when the TLS
    /// backend is unavailable.
    pub fn build(self) -> Result<Fetcher> {
        let client = create_http_client(self.config.http.clone())?;
        Ok(Fetcher::new(self.config, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use reqwest::header::{ACCEPT, USER_AGENT};

    #[test]
    fn test_builder_defaults() {
        let builder = FetcherBuilder::new();
        let config = builder.config();
        assert_eq!(config.directory, PathBuf::new());
        assert!(config.progress.is_enabled());
        assert!(config.http.headers.is_none());
        assert!(config.observer.is_none());
    }

    #[test]
    fn test_builder_observer() {
        let builder = FetcherBuilder::new().observer(NoProgress);
        assert!(builder.config().observer.is_some());
        assert!(format!("{:?}", builder.config()).contains("observer: true"));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_builder_hidden() {
        assert!(!FetcherBuilder::hidden().config().progress.is_enabled());
    }

    #[test]
    fn test_builder_options() {
        let builder = FetcherBuilder::new()
            .directory(PathBuf::from("out"))
            .endpoint(Url::parse("http://127.0.0.1:1/uc").unwrap())
            .timeout(Duration::from_secs(3))
            .connect_timeout(Duration::from_secs(1))
            .header(USER_AGENT, HeaderValue::from_static("test-agent"))
            .headers(HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("*/*"))]));

        let config = builder.config();
        assert_eq!(config.directory, PathBuf::from("out"));
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:1/uc");
        assert_eq!(config.http.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.http.connect_timeout, Some(Duration::from_secs(1)));
        let headers = config.http.headers.as_ref().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get(USER_AGENT).unwrap(), "test-agent");

        assert!(builder.build().is_ok());
    }
}
