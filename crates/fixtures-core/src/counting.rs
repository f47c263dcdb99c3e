//! Timed counting, optionally reporting the `FOO` environment variable.

use std::ffi::OsString;
use std::fmt;
use std::io::Write;

use crate::config::TimeUnit;
use crate::emit::LineEmitter;
use crate::error::FixtureError;

/// Rendering of an absent `name`.
pub const UNNAMED: &str = "None";

/// Environment variable reported by the env-aware counter.
pub const FOO_ENV: &str = "FOO";

/// Time units between counting lines.
pub const TICK_UNITS: u32 = 1;

/// Counter configuration with explicit defaults for absent options.
///
/// An absent or negative count yields zero iterations; an absent name
/// renders as [`UNNAMED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    pub count: u64,
    pub name: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            count: 0,
            name: UNNAMED.to_string(),
        }
    }
}

impl CounterConfig {
    pub fn new(count: Option<i64>, name: Option<String>) -> Self {
        Self {
            count: count.and_then(|c| u64::try_from(c).ok()).unwrap_or(0),
            name: name.unwrap_or_else(|| UNNAMED.to_string()),
        }
    }

    pub fn banner(&self) -> String {
        format!("Hello from test script instance '{}'!", self.name)
    }

    pub fn tick_line(&self, i: u64) -> String {
        format!("Instance '{}' counted to '{i}'.", self.name)
    }
}

/// Outcome of looking up [`FOO_ENV`]. Set and non-empty, or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvReport {
    Set(String),
    NotSet,
}

impl EnvReport {
    pub fn lookup() -> Self {
        Self::from_value(std::env::var_os(FOO_ENV))
    }

    /// An empty value counts as not set.
    pub fn from_value(value: Option<OsString>) -> Self {
        match value {
            Some(v) if !v.is_empty() => EnvReport::Set(v.to_string_lossy().into_owned()),
            _ => EnvReport::NotSet,
        }
    }
}

impl fmt::Display for EnvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvReport::Set(value) => write!(
                f,
                "Environment variable with the name '{FOO_ENV}' was set to the value '{value}'."
            ),
            EnvReport::NotSet => {
                write!(f, "No environment variable with the name '{FOO_ENV}' was set.")
            }
        }
    }
}

/// Print the banner, the optional environment report, then `count` tick
/// lines, pausing one time unit after each.
///
/// # Errors
///
/// Returns [`FixtureError::Write`] if stdout cannot be written.
pub fn run<W: Write>(
    out: &mut LineEmitter<W>,
    config: &CounterConfig,
    env: Option<&EnvReport>,
    unit: TimeUnit,
) -> Result<(), FixtureError> {
    out.emit(config.banner())?;

    if let Some(report) = env {
        out.emit(report)?;
    }

    tracing::debug!(count = config.count, name = %config.name, "counting");
    for i in 0..config.count {
        out.emit(config.tick_line(i))?;
        unit.pause(TICK_UNITS);
    }
    Ok(())
}
