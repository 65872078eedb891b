//! Where `write` statements and read prompts go.
//!
//! - Stdout: the `ezc` binary
//! - Buffer: tests and embedders that want the output as a string
//!
//! Enum dispatch; the set of destinations is closed.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Writes to stdout, flushing after every print so prompts appear before
/// input is read. Write failures (a closed pipe, a full disk) are returned.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) -> io::Result<()> {
        emit(&mut io::stdout().lock(), msg, true)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        emit(&mut io::stdout().lock(), msg, false)
    }
}

fn emit(out: &mut impl Write, msg: &str, newline: bool) -> io::Result<()> {
    out.write_all(msg.as_bytes())?;
    if newline {
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Captures everything printed.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
        Ok(())
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.buffer.lock().push_str(msg);
        Ok(())
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    /// Captured output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
