//! test-count-env - like test-count, and also reports whether `FOO` is set.

use anyhow::Result;
use clap::Parser;
use stdio_fixtures::cli::CountArgs;
use stdio_fixtures_core::counting::{self, EnvReport};
use stdio_fixtures_core::{LineEmitter, TimeUnit, logging};

fn main() {
    logging::init();
    let args = CountArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: CountArgs) -> Result<()> {
    let config = args.into_config();
    let report = EnvReport::lookup();
    let mut out = LineEmitter::stdout();
    counting::run(&mut out, &config, Some(&report), TimeUnit::from_env())?;
    Ok(())
}
