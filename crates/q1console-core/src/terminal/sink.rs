//! Output destinations for rendered lines

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where a logger writes its lines
#[derive(Debug, Clone, Default)]
pub enum Sink {
    /// Process standard output
    #[default]
    Stdout,
    /// In-memory buffer, shared with whoever holds the [`CaptureBuffer`]
    Memory(CaptureBuffer),
}

impl Sink {
    /// Run `f` with exclusive access to the destination
    ///
    /// Standard output stays locked for the whole closure, so segments
    /// written inside one call are not interleaved with other writers
    /// going through `std::io::stdout()`.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut dyn Write) -> R) -> R {
        match self {
            Sink::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                f(&mut handle)
            }
            Sink::Memory(buffer) => {
                let mut bytes = buffer.bytes.lock();
                f(&mut *bytes)
            }
        }
    }
}

/// Shared byte buffer collecting logger output
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink writing into this buffer
    pub fn sink(&self) -> Sink {
        Sink::Memory(self.clone())
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Completed lines written so far, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}
