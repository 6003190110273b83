//! Foreground color backends
//!
//! Two interchangeable backends implement [`Palette`]:
//! - [`AnsiPalette`]: writes SGR escape sequences straight into the stream
//! - [`ConsolePalette`]: goes through `crossterm`, which talks to the native
//!   console API on legacy Windows consoles and emits ANSI everywhere else
//!
//! The backend is picked once per process by [`detect`].

use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::Arc;

use crossterm::style::{self, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use once_cell::sync::Lazy;

/// Colors used by the console logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    Green,
    Cyan,
    Yellow,
    Red,
    /// Terminal default foreground
    Default,
}

impl Color {
    /// SGR parameter for this foreground color
    pub fn sgr_code(self) -> u8 {
        match self {
            Color::Gray => 90,
            Color::Green => 32,
            Color::Cyan => 36,
            Color::Yellow => 33,
            Color::Red => 31,
            Color::Default => 39,
        }
    }
}

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Gray => style::Color::DarkGrey,
            Color::Green => style::Color::DarkGreen,
            Color::Cyan => style::Color::DarkCyan,
            Color::Yellow => style::Color::DarkYellow,
            Color::Red => style::Color::DarkRed,
            Color::Default => style::Color::Reset,
        }
    }
}

/// "Set foreground color" capability
///
/// Implementations write into the same stream the text goes to, so a
/// backend that changes console state out of band must flush first.
pub trait Palette: Send + Sync + Debug {
    /// Short backend name, for diagnostics
    fn name(&self) -> &str;

    /// Whether colors end up as bytes in the stream passed to the palette
    ///
    /// `false` means the palette recolors the real console instead, which
    /// only makes sense when writing to standard output.
    fn writes_inline(&self) -> bool {
        true
    }

    /// Switch the foreground color for everything written afterwards
    fn set_foreground(&self, out: &mut dyn Write, color: Color) -> io::Result<()>;

    /// Restore the terminal's default colors
    fn reset(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Palette emitting raw ANSI escape sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl AnsiPalette {
    pub const RESET: &'static str = "\x1b[0m";

    /// Escape sequence selecting `color`
    pub fn sequence(color: Color) -> String {
        format!("\x1b[{}m", color.sgr_code())
    }
}

impl Palette for AnsiPalette {
    fn name(&self) -> &str {
        "ansi"
    }

    fn set_foreground(&self, out: &mut dyn Write, color: Color) -> io::Result<()> {
        out.write_all(Self::sequence(color).as_bytes())
    }

    fn reset(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(Self::RESET.as_bytes())
    }
}

/// Palette backed by the platform console through `crossterm`
///
/// On legacy Windows consoles crossterm switches colors through the
/// console API, outside of the written stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePalette;

impl Palette for ConsolePalette {
    fn name(&self) -> &str {
        "console"
    }

    fn writes_inline(&self) -> bool {
        !cfg!(windows)
    }

    fn set_foreground(&self, out: &mut dyn Write, color: Color) -> io::Result<()> {
        out.queue(SetForegroundColor(color.into()))?;
        Ok(())
    }

    fn reset(&self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(ResetColor)?;
        Ok(())
    }
}

static DETECTED: Lazy<Arc<dyn Palette>> = Lazy::new(|| {
    let palette: Arc<dyn Palette> = if cfg!(windows) {
        Arc::new(ConsolePalette)
    } else {
        Arc::new(AnsiPalette)
    };
    palette
});

/// Palette for the current platform
///
/// Windows gets the native console backend so colors work on consoles
/// without virtual terminal processing; every other platform uses ANSI.
pub fn detect() -> Arc<dyn Palette> {
    Arc::clone(&DETECTED)
}
