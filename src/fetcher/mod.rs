//! Fetcher module containing the core fetch logic, builder pattern, and
//! configuration.
//!
//! - `fetcher` - the [`Fetcher`] running show and download requests
//! - `builder` - [`FetcherBuilder`] for configuring a fetcher
//! - `config` - configuration structure and defaults
//! - `transfer` - size-limited body copy
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::fetcher::FetcherBuilder;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), gdfetch::Error> {
//! let fetcher = FetcherBuilder::hidden()
//!     .directory(PathBuf::from("./downloads"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;
pub mod transfer;

pub use builder::FetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::Fetcher;
pub use transfer::{copy_exact, LimitedStream};
