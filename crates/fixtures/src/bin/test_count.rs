//! test-count - count up to `--count`, one line per time unit.

use anyhow::Result;
use clap::Parser;
use stdio_fixtures::cli::CountArgs;
use stdio_fixtures_core::{LineEmitter, TimeUnit, counting, logging};

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
    let mut out = LineEmitter::stdout();
    counting::run(&mut out, &config, None, TimeUnit::from_env())?;
    Ok(())
}
