//! The read-eval loop.

use std::io::{self, BufRead};

use cmdsh_core::{Dispatcher, Outcome, ShellConfig};
use tracing::{debug, warn};

/// Print the banner, then prompt, read and dispatch until `exit` or end of
/// input. Returns the exit status for the process.
pub fn run<R: BufRead>(dispatcher: &mut Dispatcher, config: &ShellConfig, mut input: R) -> io::Result<i32> {
    dispatcher.console_mut().line(&config.banner)?;

    let mut line = String::new();
    loop {
        dispatcher.console_mut().prompt(&config.prompt)?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                return Ok(0);
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "skipping unreadable input line");
                continue;
            }
            Err(e) => return Err(e),
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }
        if let Outcome::Exit(code) = dispatcher.dispatch(text) {
            return Ok(code);
        }
    }
}

/// Dispatch a single command line without the interactive loop.
pub fn run_once(dispatcher: &mut Dispatcher, line: &str) -> i32 {
    match dispatcher.dispatch(line) {
        Outcome::Exit(code) => code,
        Outcome::Continue => 0,
    }
}
