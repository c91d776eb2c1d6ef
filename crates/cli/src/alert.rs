//! Alerts shown on the terminal.

use std::io::{BufRead, IsTerminal};
use tokio::runtime::{Handle, RuntimeFlavor};
use waveportal::Alert;
use yansi::Paint;

/// Prints the alert to stderr and, on an interactive terminal, waits for the user to press
/// enter.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        anstream::eprintln!("{}", message.red().bold());

        if !std::io::stdin().is_terminal() {
            return;
        }
        anstream::eprint!("{}", "Press enter to continue".dim());
        run_blocking(|| {
            let mut line = String::new();
            if let Err(err) = std::io::stdin().lock().read_line(&mut line) {
                debug!(%err, "failed to read alert acknowledgement");
            }
        });
    }
}

/// Runs the blocking `f`, handing the current worker's tasks off first when called from a
/// multi-threaded runtime.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}
