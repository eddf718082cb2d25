//! Interactive download confirmation.
//!
//! The fetcher never touches the terminal directly; it asks a [`Confirm`]
//! implementation. [`LinePrompt::stdio`] is what the binary uses, while tests
//! drive a [`LinePrompt`] over in-memory buffers.
//!
//! # Examples
//!
//! ```rust
//! use gdfetch::download::{Confirm, LinePrompt};
//! use std::io::Cursor;
//!
//! let mut prompt = LinePrompt::new(Cursor::new("n\n"), Vec::new());
//! assert_eq!(prompt.ask("Continue? [Y/n]: ")?, "n\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, BufRead, Write};

/// Answer that declines the download.
pub const DECLINE: &str = "n";

/// Asks the user a question and returns the raw line they typed.
pub trait Confirm {
    /// Displays `question` and reads one line of input.
    ///
    /// End of input yields an empty string.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// `true` when `answer` declines the download.
///
/// Only an exact `n` (ignoring surrounding whitespace) declines; anything
/// else, including an empty line, accepts.
pub fn is_declined(answer: &str) -> bool {
    answer.trim() == DECLINE
}

/// A [`Confirm`] over any line reader and writer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Creates a new [`LinePrompt`].
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get a reference to what has been written so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process' standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}
