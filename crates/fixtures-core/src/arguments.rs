//! Echo every invocation argument, including the program token at index 0.

use std::ffi::OsStr;
use std::io::Write;

use crate::emit::LineEmitter;
use crate::error::FixtureError;

pub const BANNER: &str = "Hello! The following arguments were passed!";
pub const CLOSING: &str = "All arguments printed.";

/// Print the banner, one `{index}: {argument}` line per argument, then the
/// closing line. Returns the number of arguments echoed.
///
/// Arguments that are not valid UTF-8 are rendered lossily.
///
/// # Errors
///
/// Returns [`FixtureError::Write`] if stdout cannot be written.
pub fn run<W, I, S>(out: &mut LineEmitter<W>, args: I) -> Result<usize, FixtureError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    out.emit(BANNER)?;

    let mut echoed = 0;
    for (index, arg) in args.into_iter().enumerate() {
        out.emit(format_args!("{index}: {}", arg.as_ref().to_string_lossy()))?;
        echoed += 1;
    }

    out.emit(CLOSING)?;
    Ok(echoed)
}
