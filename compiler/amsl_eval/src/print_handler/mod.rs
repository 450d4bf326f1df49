//! Where `print` output goes.
//!
//! Enum dispatch over the two destinations: the process stdout and an
//! in-memory buffer for embedders that read the output back.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug)]
pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
}

/// Print handler shared between the builtins that write to it and the
/// embedder that reads it back.
pub type SharedPrintHandler = Arc<PrintHandler>;

impl PrintHandler {
    pub fn stdout() -> SharedPrintHandler {
        Arc::new(PrintHandler::Stdout)
    }

    pub fn buffer() -> SharedPrintHandler {
        Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
    }

    /// Write `text` as is. Stdout is flushed so that output interleaves
    /// correctly with `readline` prompts.
    pub fn write(&self, text: &str) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()
            }
            PrintHandler::Buffer(buf) => {
                buf.lock().push_str(text);
                Ok(())
            }
        }
    }

    /// Captured output so far; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => buf.lock().clone(),
            PrintHandler::Stdout => String::new(),
        }
    }
}

#[cfg(test)]
mod tests;
