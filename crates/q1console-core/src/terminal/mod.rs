//! Terminal plumbing: color backends, output sinks and timestamps

mod clock;
mod palette;
mod sink;

pub use clock::{format_time, timestamp, TIME_FORMAT};
pub use palette::{detect, AnsiPalette, Color, ConsolePalette, Palette};
pub use sink::{CaptureBuffer, Sink};
