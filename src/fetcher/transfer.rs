//! Body-to-file copy.
//!
//! The copy stops at the declared size, whatever the server sends after it,
//! and fails if the body ends before reaching it.

use crate::error::{Error, Result};

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// A stream that yields at most `limit` bytes, then ends without polling
/// the inner stream again.
pub struct LimitedStream<S> {
    inner: S,
    remaining: u64,
}

impl<S> LimitedStream<S> {
    /// Wraps `inner`, capping it at `limit` bytes.
    pub fn new(inner: S, limit: u64) -> Self {
        Self {
            inner,
            remaining: limit,
        }
    }

    /// Bytes still allowed through.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<S, E> Stream for LimitedStream<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
{
    type Item = std::result::Result<Bytes, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.remaining == 0 {
            return Poll::Ready(None);
        }
        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(Ok(mut chunk))) => {
                if chunk.len() as u64 > this.remaining {
                    warn!(
                        "Discarding {} bytes past the declared size",
                        chunk.len() as u64 - this.remaining
                    );
                    chunk.truncate(this.remaining as usize);
                }
                this.remaining -= chunk.len() as u64;
                Poll::Ready(Some(Ok(chunk)))
            }
            other => other,
        }
    }
}

/// Copy `body` into `writer`, expecting exactly `expected` bytes.
///
/// Returns the number of bytes written. `writer` is flushed before
/// returning, even when the body turns out to be short.
///
/// # Errors
///
/// [`Error::Transfer`] when the body yields an error, a write fails, or the
/// body ends before `expected` bytes were received.
pub async fn copy_exact<S, E, W>(mut body: S, writer: &mut W, expected: u64) -> Result<u64>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    W: AsyncWrite + Unpin,
{
    let mut written: u64 = 0;

    debug!("Retrieving chunks...");
    while let Some(item) = body.next().await {
        let chunk = item.map_err(|e| Error::transfer(io::Error::other(e)))?;
        writer.write_all(&chunk).await.map_err(Error::transfer)?;
        written += chunk.len() as u64;
    }
    writer.flush().await.map_err(Error::transfer)?;

    if written < expected {
        return Err(Error::transfer(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("body ended after {} of {} bytes", written, expected),
        )));
    }

    Ok(written)
}
