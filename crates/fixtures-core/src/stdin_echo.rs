//! Echo standard input line by line until a sentinel line arrives.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::emit::LineEmitter;
use crate::error::FixtureError;

pub const BANNER: &str = "Hello! Waiting for input on stdin!";
pub const CLOSING: &str = "Received exit message! Bye!";

/// Lines starting with this prefix end the echo loop.
pub const SENTINEL_PREFIX: &str = "exit";

/// How the echo loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoOutcome {
    /// A sentinel line was echoed and acknowledged.
    Sentinel,
    /// Input closed without a sentinel.
    EndOfInput,
}

pub fn is_sentinel(line: &str) -> bool {
    line.starts_with(SENTINEL_PREFIX)
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Print the banner, then echo each input line as `input: {line}`.
///
/// Stops at the first sentinel line, after printing the closing line.
/// Nothing after the sentinel is read.
///
/// # Errors
///
/// Returns [`FixtureError::Read`] if the input fails and
/// [`FixtureError::Write`] if stdout cannot be written.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut LineEmitter<W>,
) -> Result<EchoOutcome, FixtureError> {
    out.emit(BANNER)?;

    for raw in input.split(b'\n') {
        let raw = raw.map_err(FixtureError::Read)?;
        let line = decode_line(&raw);
        out.emit(format_args!("input: {line}"))?;

        if is_sentinel(&line) {
            out.emit(CLOSING)?;
            tracing::debug!("sentinel received");
            return Ok(EchoOutcome::Sentinel);
        }
    }

    Ok(EchoOutcome::EndOfInput)
}

/// Block the calling thread until the process is terminated externally.
///
/// Used after input closes without a sentinel. Parks instead of polling the
/// closed stream, so it costs no CPU while waiting.
pub fn wait_for_termination() -> ! {
    tracing::debug!("input closed without sentinel, waiting for termination");
    loop {
        std::thread::park();
    }
}
