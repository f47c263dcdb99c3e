//! Interleaved stdout/stderr lines around a pause.
//!
//! Emits one line per channel, pauses, then emits a second line per
//! channel. Each line is flushed before the next is written, so an observer
//! of both pipes sees `stdout, stderr, <pause>, stdout, stderr`.

use std::io::Write;

use crate::config::TimeUnit;
use crate::emit::LineEmitter;
use crate::error::FixtureError;

pub const STDOUT_HELLO: &str = "Hello from stdout!";
pub const STDERR_HELLO: &str = "Hello from stderr!";
pub const STDOUT_BYE: &str = "Bye from stdout!";
pub const STDERR_BYE: &str = "Bye from stderr!";

/// Time units between the hello pair and the bye pair.
pub const PAUSE_UNITS: u32 = 3;

/// Run the dual-channel sequence.
///
/// # Errors
///
/// Returns [`FixtureError::Write`] on the first channel write that fails.
pub fn run<O: Write, E: Write>(
    out: &mut LineEmitter<O>,
    err: &mut LineEmitter<E>,
    unit: TimeUnit,
) -> Result<(), FixtureError> {
    out.emit(STDOUT_HELLO)?;
    err.emit(STDERR_HELLO)?;

    unit.pause(PAUSE_UNITS);

    out.emit(STDOUT_BYE)?;
    err.emit(STDERR_BYE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Channel;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Both channels append to one shared log, tagged at flush time.
    struct Tagged {
        channel: Channel,
        buf: Vec<u8>,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Write for Tagged {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            let text = String::from_utf8_lossy(&self.buf).trim_end().to_string();
            self.log.borrow_mut().push(format!("{}: {text}", self.channel));
            self.buf.clear();
            Ok(())
        }
    }

    #[test]
    fn each_channel_gets_hello_then_bye() {
        let mut out = LineEmitter::new(Vec::new(), Channel::Stdout);
        let mut err = LineEmitter::new(Vec::new(), Channel::Stderr);

        run(&mut out, &mut err, TimeUnit::ZERO).unwrap();

        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "Hello from stdout!\nBye from stdout!\n"
        );
        assert_eq!(
            String::from_utf8(err.into_inner()).unwrap(),
            "Hello from stderr!\nBye from stderr!\n"
        );
    }

    #[test]
    fn channels_alternate_in_flush_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tagged = |channel| Tagged {
            channel,
            buf: Vec::new(),
            log: Rc::clone(&log),
        };
        let mut out = LineEmitter::new(tagged(Channel::Stdout), Channel::Stdout);
        let mut err = LineEmitter::new(tagged(Channel::Stderr), Channel::Stderr);

        run(&mut out, &mut err, TimeUnit::ZERO).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "stdout: Hello from stdout!",
                "stderr: Hello from stderr!",
                "stdout: Bye from stdout!",
                "stderr: Bye from stderr!",
            ]
        );
    }

    #[test]
    fn bye_pair_waits_for_the_pause() {
        let unit = TimeUnit::from_millis(20);
        let mut out = LineEmitter::new(Vec::new(), Channel::Stdout);
        let mut err = LineEmitter::new(Vec::new(), Channel::Stderr);

        let start = std::time::Instant::now();
        run(&mut out, &mut err, unit).unwrap();
        assert!(start.elapsed() >= unit.times(PAUSE_UNITS));
    }
}
