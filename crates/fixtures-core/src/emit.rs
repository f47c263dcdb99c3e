//! Write-line-and-flush output for the fixtures.

use std::fmt;
use std::io::{self, Write};

use crate::error::FixtureError;

/// The output channel a line is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stdout => f.write_str("stdout"),
            Channel::Stderr => f.write_str("stderr"),
        }
    }
}

/// Writes whole lines to one channel, flushing after every line.
///
/// The process-level stdout is line-buffered only when attached to a
/// terminal, so the explicit flush is what makes each line visible to a
/// harness reading from a pipe.
#[derive(Debug)]
pub struct LineEmitter<W> {
    writer: W,
    channel: Channel,
}

impl LineEmitter<io::Stdout> {
    /// Emitter for the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Channel::Stdout)
    }
}

impl LineEmitter<io::Stderr> {
    /// Emitter for the process's standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), Channel::Stderr)
    }
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W, channel: Channel) -> Self {
        Self { writer, channel }
    }

    /// Write `line` followed by `\n`, then flush.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Write`] if either the write or the flush fails.
    pub fn emit(&mut self, line: impl fmt::Display) -> Result<(), FixtureError> {
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| FixtureError::Write {
                channel: self.channel,
                source,
            })?;
        tracing::debug!(channel = %self.channel, "line emitted");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
