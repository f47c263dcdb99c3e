//! Error types for fixture execution

use std::io;

use thiserror::Error;

use crate::emit::Channel;

/// Fixture execution errors
///
/// All variants are fatal; the binaries report them and exit non-zero.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Writing or flushing an output channel failed
    #[error("failed to write to {channel}: {source}")]
    Write {
        channel: Channel,
        #[source]
        source: io::Error,
    },

    /// Reading standard input failed for a reason other than end-of-file
    #[error("failed to read from stdin: {0}")]
    Read(#[source] io::Error),
}
