//! test-stdin - echo stdin lines until one starts with `exit`.
//!
//! If stdin closes first, the process stays alive until it is killed.

use std::io;

use anyhow::Result;
use stdio_fixtures_core::stdin_echo::{self, EchoOutcome};
use stdio_fixtures_core::{LineEmitter, logging};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut out = LineEmitter::stdout();
    match stdin_echo::run(io::stdin().lock(), &mut out)? {
        EchoOutcome::Sentinel => Ok(()),
        EchoOutcome::EndOfInput => stdin_echo::wait_for_termination(),
    }
}
