//! Destination of the `print` builtins.
//!
//! The interpreter writes program output through a shared handler:
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: an in-memory capture, for tests and embedding hosts
//! - `Silent`: discards everything

use std::sync::Arc;

use parking_lot::Mutex;

/// Output sink for program output, one line per `print` call.
pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandler {
    /// Write `text` followed by a newline.
    pub fn write_line(&self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Handler shared between the interpreter, its builtins and the host.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
