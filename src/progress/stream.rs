//! Byte stream decorator reporting to a [`ProgressObserver`].
//!
//! ```rust
//! use futures::{executor::block_on, stream, StreamExt};
//! use gdfetch::progress::{ByteCounter, ProgressStream};
//!
//! let counter = ByteCounter::new();
//! let chunks = stream::iter(vec![Ok::<_, std::io::Error>(vec![0u8; 3]), Ok(vec![0u8; 4])]);
//! let tracked = ProgressStream::new(chunks, counter.clone());
//! let collected: Vec<_> = block_on(tracked.collect());
//! assert_eq!(collected.len(), 2);
//! assert_eq!(counter.total(), 7);
//! ```

use super::observer::ProgressObserver;

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that reports every chunk it yields.
///
/// Items pass through untouched, errors included; only successful chunks
/// are counted.
pub struct ProgressStream<S, O> {
    inner: S,
    observer: O,
    transferred: u64,
}

impl<S, O> ProgressStream<S, O> {
    /// Wraps `inner`, reporting to `observer`.
    pub fn new(inner: S, observer: O) -> Self {
        Self {
            inner,
            observer,
            transferred: 0,
        }
    }

    /// Bytes yielded so far.
    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Get a reference to the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<S, O, B, E> Stream for ProgressStream<S, O>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    O: ProgressObserver + Unpin,
    B: AsRef<[u8]>,
{
    type Item = Result<B, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => {
                let len = chunk.as_ref().len() as u64;
                this.transferred += len;
                this.observer.advance(len);
                Poll::Ready(Some(Ok(chunk)))
            }
            other => other,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
