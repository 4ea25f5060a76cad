//! Terminal output.
//!
//! Builtins never touch stdout directly; they write through a [`Console`],
//! which owns the output and error streams and decides whether success and
//! failure lines are colored. [`Console::captured`] swaps both streams for
//! in-memory buffers.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::style::Stylize;

pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    color: bool,
}

impl Console {
    /// Console over the process stdout/stderr.
    pub fn stdio(color: bool) -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()), color)
    }

    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Uncolored console writing into shared buffers.
    pub fn captured() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        let console = Self::new(
            Box::new(captured.out.clone()),
            Box::new(captured.err.clone()),
            false,
        );
        (console, captured)
    }

    /// Plain line on the output stream.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Confirmation of a completed operation.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.green())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// Failure report on the error stream.
    pub fn failure(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.err, "{}", text.red())
        } else {
            writeln!(self.err, "{text}")
        }
    }

    /// Write without a newline and flush, for prompts.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Raw access to the output stream for terminal commands.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Cloneable in-memory sink.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Both streams of a [`Console::captured`] console.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub out: SharedBuffer,
    pub err: SharedBuffer,
}

impl CapturedOutput {
    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }

    pub fn clear(&self) {
        self.out.clear();
        self.err.clear();
    }
}
