//! Core library for stdio-fixtures: the observable contracts of the fixture
//! binaries used to exercise a process-supervision harness.
//!
//! Every fixture writes through [`emit::LineEmitter`], which flushes after
//! each line so an observer watching stdout and stderr sees lines in
//! wall-clock emission order.

pub mod arguments;
pub mod config;
pub mod counting;
pub mod dual_channel;
pub mod emit;
pub mod error;
pub mod logging;
pub mod stdin_echo;

pub use config::TimeUnit;
pub use emit::{Channel, LineEmitter};
pub use error::FixtureError;
