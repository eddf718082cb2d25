//! Transfer progress reporting.
//!
//! Progress is an observer of the byte stream, not part of the copy: the
//! body stream is wrapped in a [`ProgressStream`] that tells a
//! [`ProgressObserver`] how many bytes went by. Swapping the indicatif bar for
//! [`NoProgress`] changes nothing else.
//!
//! - `style` - progress bar styling options
//! - `observer` - the observer trait and its implementations
//! - `stream` - the stream decorator
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::progress::{ProgressBarOpts, ProgressObserver};
//!
//! let bar = ProgressBarOpts::hidden().to_progress_bar(2048);
//! bar.advance(1024);
//! assert_eq!(bar.position(), 1024);
//! ```

pub(crate) mod observer;
pub(crate) mod stream;
pub(crate) mod style;

pub use observer::{ByteCounter, NoProgress, ProgressObserver, SharedObserver};
pub use stream::ProgressStream;
pub use style::ProgressBarOpts;
