//! Command-line front end.
//!
//! [`execute`] is the whole program minus process setup: it parses the
//! arguments, runs the fetcher, prints the result and returns the exit
//! status. `main` only wires it to the real terminal.

pub mod args;

pub use args::{check_positional, normalize_flags, parse_from, usage, Args, Invocation};

use crate::download::{Confirm, Outcome};
use crate::error::Error;
use crate::fetcher::FetcherBuilder;

use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// Prefix of every error line.
pub const ERROR_PREFIX: &str = "[ \u{274c} Error]";

/// Run one invocation and return the process exit status.
///
/// `builder` carries library-level settings the command line does not
/// expose (endpoint, progress style); the `-timeout` flag is applied on top
/// of it.
pub async fn execute<I, T, C, W, E>(
    args: I,
    builder: FetcherBuilder,
    prompt: &mut C,
    out: &mut W,
    err: &mut E,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    C: Confirm + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let options = match parse_from(args) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Info(text)) => {
            let _ = write!(out, "{}", text);
            return 0;
        }
        Err(e) => return report(&e, err),
    };
    debug!("Options: {:?}", options);

    let builder = match options.timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    let fetcher = match builder.build() {
        Ok(fetcher) => fetcher,
        Err(e) => return report(&e, err),
    };

    match fetcher.run(&options, prompt, out).await {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                let _ = writeln!(out, "{}", message);
            }
            if let Outcome::Downloaded { path, bytes } = &outcome {
                debug!("Wrote {} bytes to {}", bytes, path.display());
            }
            outcome.exit_code()
        }
        Err(e) => report(&e, err),
    }
}

/// Print `e` (and the usage text for invocation mistakes), then return its
/// exit status.
pub fn report<E: Write + ?Sized>(e: &Error, err: &mut E) -> i32 {
    let _ = writeln!(err, "{} {}", ERROR_PREFIX, e);
    if e.is_usage() {
        let _ = write!(err, "{}", usage());
    }
    e.exit_code()
}
