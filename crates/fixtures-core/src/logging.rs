//! Shared logging initialization for the fixture binaries.
//!
//! stdout and stderr are the fixtures' observed output, so nothing is logged
//! unless `STDIO_FIXTURES_LOG` names a level. When enabled, records go to
//! stderr.

use std::sync::OnceLock;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "STDIO_FIXTURES_LOG";

static INIT: OnceLock<()> = OnceLock::new();

fn parse_level(raw: Option<&str>) -> Option<tracing::Level> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

/// Initialize process-level tracing output from `STDIO_FIXTURES_LOG`.
///
/// This is safe to call multiple times; only the first call has an effect.
/// It never returns an error.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    if let Some(level) = parse_level(std::env::var(LOG_ENV).ok().as_deref()) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
    let _ = INIT.set(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_unknown_level_disables_logging() {
        assert_eq!(parse_level(None), None);
        assert_eq!(parse_level(Some("")), None);
        assert_eq!(parse_level(Some("off")), None);
        assert_eq!(parse_level(Some("verbose")), None);
    }

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("DEBUG")), Some(tracing::Level::DEBUG));
        assert_eq!(parse_level(Some(" warn ")), Some(tracing::Level::WARN));
        assert_eq!(parse_level(Some("Trace")), Some(tracing::Level::TRACE));
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
