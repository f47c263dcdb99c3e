//! Shared command-line surface for the stdio-fixtures binaries.
//!
//! The fixture behaviour lives in `stdio_fixtures_core`; the binaries under
//! `src/bin/` only wire process stdio, the environment and argv into it.

pub mod cli;
