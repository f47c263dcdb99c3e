//! CLI argument types for the counting fixtures.

use clap::Parser;
use stdio_fixtures_core::counting::CounterConfig;

/// Simple counter test script.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CountArgs {
    /// Number to count to
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Name to display
    #[arg(short, long)]
    pub name: Option<String>,
}

impl CountArgs {
    pub fn into_config(self) -> CounterConfig {
        CounterConfig::new(self.count, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CounterConfig, clap::Error> {
        CountArgs::try_parse_from(std::iter::once("test-count").chain(args.iter().copied()))
            .map(CountArgs::into_config)
    }

    #[test]
    fn short_and_long_flags() {
        let short = parse(&["-c", "3", "-n", "X"]).unwrap();
        let long = parse(&["--count", "3", "--name", "X"]).unwrap();
        assert_eq!(short, long);
        assert_eq!(short.count, 3);
        assert_eq!(short.name, "X");
    }

    #[test]
    fn no_flags_is_default_config() {
        assert_eq!(parse(&[]).unwrap(), CounterConfig::default());
    }

    #[test]
    fn negative_count_parses_to_zero_iterations() {
        assert_eq!(parse(&["-c", "-2"]).unwrap().count, 0);
    }

    #[test]
    fn non_integer_count_is_rejected() {
        let err = parse(&["--count", "three"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
