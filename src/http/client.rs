//! HTTP client setup and middleware configuration.
//!
//! Requests go through a [`ClientWithMiddleware`] so that every call is
//! traced with `reqwest-tracing`. There is no retry middleware:
//! a failed request ends the run.
//!
//! # Examples
//!
//! ## Basic Client Creation
//!
//! ```rust
//! use gdfetch::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client with a Timeout
//!
//! ```rust
//! use gdfetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Some(Duration::from_secs(30)),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Whole-request timeout, body included. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Timeout for establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates an HTTP client with tracing middleware.
///
/// # Arguments
///
/// * `config` - Configuration for the HTTP client
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = config.timeout {
        inner_client_builder = inner_client_builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        inner_client_builder = inner_client_builder.connect_timeout(connect_timeout);
    }

    // Configure proxy if provided
    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    // Configure default headers if provided
    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
