//! test-arguments - echo every argument, including the program token.
//!
//! Takes no flags; `--help` and friends are echoed like any other argument.

use anyhow::Result;
use stdio_fixtures_core::{LineEmitter, arguments, logging};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut out = LineEmitter::stdout();
    let echoed = arguments::run(&mut out, std::env::args_os())?;
    tracing::debug!(echoed, "arguments echoed");
    Ok(())
}
