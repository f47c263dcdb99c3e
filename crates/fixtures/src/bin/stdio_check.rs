//! stdio-check - one line per channel, a three-unit pause, one more line per channel.

use anyhow::Result;
use stdio_fixtures_core::{LineEmitter, TimeUnit, dual_channel, logging};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut out = LineEmitter::stdout();
    let mut err = LineEmitter::stderr();
    dual_channel::run(&mut out, &mut err, TimeUnit::from_env())?;
    Ok(())
}
