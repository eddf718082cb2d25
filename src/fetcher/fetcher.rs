//! Core fetcher implementation.
//!
//! This module contains the [`Fetcher`] that turns a share-link into either
//! a metadata report or a file on disk.
//!
//! # Examples
//!
//! ## Show Metadata
//!
//! ```rust,no_run
//! use gdfetch::{FetcherBuilder, ShareLink};
//!
//! # async fn example() -> Result<(), gdfetch::Error> {
//! let fetcher = FetcherBuilder::new().build()?;
//! let link = ShareLink::parse("https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view")?;
//! let metadata = fetcher.show(&link).await?;
//! println!("{} is {}", metadata.filename, metadata.human_size());
//! # Ok(())
//! # }
//! ```
//!
//! ## Download Without Prompting
//!
//! ```rust,no_run
//! use gdfetch::{FetcherBuilder, LinePrompt, ShareLink};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), gdfetch::Error> {
//! let fetcher = FetcherBuilder::new().build()?;
//! let link = ShareLink::parse("https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view")?;
//! let mut prompt = LinePrompt::stdio();
//! fetcher
//!     .download(&link, Some(Path::new("custom.bin")), true, &mut prompt)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use super::transfer::{copy_exact, LimitedStream};
use crate::download::{is_declined, Confirm, FileMetadata, Outcome};
use crate::error::{Error, Result};
use crate::options::{Mode, RequestOptions};
use crate::progress::{ProgressStream, SharedObserver};
use crate::share::ShareLink;

use indicatif::ProgressBar;
use reqwest::{Method, Response, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tracing::{debug, info};

/// Fetches shared files.
///
/// A fetcher is created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), gdfetch::Error> {
/// use gdfetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
    client: ClientWithMiddleware,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration and client.
    pub(crate) fn new(config: FetcherConfig, client: ClientWithMiddleware) -> Self {
        Self { config, client }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Direct-download URL for `link` on the configured endpoint.
    pub fn resolve(&self, link: &ShareLink) -> Url {
        link.download_url_with(&self.config.endpoint)
    }

    /// Where a download ends up: `output` if given, else the remote name,
    /// both relative to the configured directory.
    pub fn destination(&self, output: Option<&Path>, metadata: &FileMetadata) -> PathBuf {
        match output {
            Some(output) => self.config.directory.join(output),
            None => self.config.directory.join(&metadata.filename),
        }
    }

    /// Runs the operation `options` asks for.
    ///
    /// In show mode the report is written to `out`; in download mode
    /// `prompt` is consulted unless confirmation is skipped.
    pub async fn run<C, W>(
        &self,
        options: &RequestOptions,
        prompt: &mut C,
        out: &mut W,
    ) -> Result<Outcome>
    where
        C: Confirm + ?Sized,
        W: Write + ?Sized,
    {
        match options.mode {
            Mode::Show => {
                if options.output.is_some() {
                    debug!("Ignoring output file name in show mode");
                }
                let metadata = self.show(&options.link).await?;
                out.write_all(metadata.report().as_bytes())?;
                out.flush()?;
                Ok(Outcome::Shown(metadata))
            }
            Mode::Download => {
                self.download(
                    &options.link,
                    options.output.as_deref(),
                    options.skip_confirmation,
                    prompt,
                )
                .await
            }
        }
    }

    /// Retrieves the metadata of a shared file with a `HEAD` request.
    ///
    /// Nothing is written to disk.
    pub async fn show(&self, link: &ShareLink) -> Result<FileMetadata> {
        let (metadata, _) = self.fetch_metadata(Method::HEAD, link).await?;
        Ok(metadata)
    }

    /// Sends `method` to the direct-download URL of `link` and reads the
    /// file metadata from the response headers.
    ///
    /// The response is handed back so a `GET` body can still be streamed.
    pub async fn fetch_metadata(
        &self,
        method: Method,
        link: &ShareLink,
    ) -> Result<(FileMetadata, Response)> {
        let url = self.resolve(link);
        debug!("{} {}", method, url);
        let res = self.client.request(method, url).send().await?;
        let res = ensure_ok(res)?;
        let metadata = FileMetadata::from_headers(res.headers())?;
        Ok((metadata, res))
    }

    /// Downloads a shared file with a `GET` request.
    ///
    /// Unless `skip_confirmation` is set, `prompt` is asked first; a `n`
    /// answer returns [`Outcome::Aborted`] before anything is created on
    /// disk. A failed transfer leaves the partial file in place.
    pub async fn download<C>(
        &self,
        link: &ShareLink,
        output: Option<&Path>,
        skip_confirmation: bool,
        prompt: &mut C,
    ) -> Result<Outcome>
    where
        C: Confirm + ?Sized,
    {
        let (metadata, res) = self.fetch_metadata(Method::GET, link).await?;
        let path = self.destination(output, &metadata);
        info!(
            "Remote file {} ({} bytes), saving as {}",
            metadata.filename,
            metadata.size,
            path.display()
        );

        if !skip_confirmation {
            let question = format!(
                "Download {} ({}) and save as {}? [Y/n]: ",
                metadata.filename,
                metadata.human_size(),
                path.display()
            );
            let answer = prompt.ask(&question)?;
            if is_declined(&answer) {
                info!("Download declined");
                return Ok(Outcome::Aborted);
            }
        }

        debug!("Creating destination file {:?}", &path);
        let mut file = File::create(&path).await.map_err(Error::transfer)?;

        let (observer, bar) = self.progress_observer(metadata.size);
        let body = ProgressStream::new(
            LimitedStream::new(Box::pin(res.bytes_stream()), metadata.size),
            observer,
        );
        let copied = copy_exact(body, &mut file, metadata.size).await;
        if let Some(bar) = &bar {
            self.finish_progress(bar);
        }

        let bytes = copied?;
        info!("Saved {} bytes to {}", bytes, path.display());
        Ok(Outcome::Downloaded { path, bytes })
    }

    /// The configured observer, or a fresh progress bar of `len` bytes.
    fn progress_observer(&self, len: u64) -> (SharedObserver, Option<ProgressBar>) {
        match &self.config.observer {
            Some(observer) => (observer.clone(), None),
            None => {
                let pb = self.config.progress.clone().to_progress_bar(len);
                let observer: SharedObserver = Arc::new(pb.clone());
                (observer, Some(pb))
            }
        }
    }

    fn finish_progress(&self, pb: &ProgressBar) {
        if self.config.progress.clear() {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}

/// Anything but `200 OK` is an error. Redirects are followed by the client
/// and never show up here.
fn ensure_ok(res: Response) -> Result<Response> {
    match res.status() {
        StatusCode::OK => Ok(res),
        status => {
            debug!("Unexpected status {} from {}", status, res.url());
            Err(Error::UnexpectedStatus(status))
        }
    }
}
