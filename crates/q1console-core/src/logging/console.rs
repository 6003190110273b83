//! Console logger implementation
//!
//! Every line has the shape
//!
//! ```text
//! [gray]DD-MM-YYYY HH:MM:SS[reset] [color]TAG[reset] [file]: message
//! ```
//!
//! where the timestamp and tag segments can be switched off per instance
//! and colors can be dropped entirely.

use std::io::{self, Write};
use std::sync::Arc;

use super::severity::Severity;
use super::traits::Logger;
use crate::config::LoggerConfig;
use crate::terminal::{self, AnsiPalette, Color, Palette, Sink};

/// Label used when no file is associated with a logger
pub const UNKNOWN_FILE: &str = "unknown";

/// Namespaces are shortened to this many characters in the label
pub const MAX_SPACE_CHARS: usize = 10;

/// Strip everything up to and including the last `/` or `\`
pub fn basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// A logger that prints colorized lines to standard output
///
/// Configuration is mutated in place through the chaining setters; the
/// `disable_*` switches are one-way for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    file: String,
    space: Option<String>,
    show_time: bool,
    show_type: bool,
    colorize: bool,
    min_severity: Severity,
    palette: Arc<dyn Palette>,
    sink: Sink,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(UNKNOWN_FILE)
    }
}

impl ConsoleLogger {
    /// Create a logger labelled with the basename of `path`
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            file: basename(path.as_ref()).to_string(),
            space: None,
            show_time: true,
            show_type: true,
            colorize: true,
            min_severity: Severity::default_threshold(),
            palette: terminal::detect(),
            sink: Sink::default(),
        }
    }

    /// Create a logger from deserialized settings
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new(&config.file).with_min_severity(config.min_severity());
        if let Some(space) = &config.space {
            logger.set_space(space);
        }
        if !config.show_time {
            logger.disable_time();
        }
        if !config.show_type {
            logger.disable_type();
        }
        if !config.colorize {
            logger.disable_colorization();
        }
        logger
    }

    /// Replace the output destination
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the color backend picked by [`terminal::detect`]
    pub fn with_palette(mut self, palette: Arc<dyn Palette>) -> Self {
        self.palette = palette;
        self
    }

    /// Drop every message below `severity`
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Replace the file label; directories are stripped like in [`ConsoleLogger::new`]
    pub fn set_file(&mut self, path: impl AsRef<str>) -> &mut Self {
        self.file = basename(path.as_ref()).to_string();
        self
    }

    /// Attach a namespace, printed shortened in front of the file label
    pub fn set_space(&mut self, space: impl Into<String>) -> &mut Self {
        self.space = Some(space.into());
        self
    }

    /// Stop printing the timestamp segment
    pub fn disable_time(&mut self) -> &mut Self {
        self.show_time = false;
        self
    }

    /// Stop printing the severity tag segment
    pub fn disable_type(&mut self) -> &mut Self {
        self.show_type = false;
        self
    }

    /// Print every segment without colors
    pub fn disable_colorization(&mut self) -> &mut Self {
        self.colorize = false;
        self
    }

    /// File label printed in brackets
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Full namespace, if one was attached
    pub fn space(&self) -> Option<&str> {
        self.space.as_deref()
    }

    /// Namespace cut to [`MAX_SPACE_CHARS`] characters
    pub fn short_space(&self) -> Option<&str> {
        self.space.as_deref().map(|space| match space.char_indices().nth(MAX_SPACE_CHARS) {
            Some((idx, _)) => &space[..idx],
            None => space,
        })
    }

    /// Whether lines start with a timestamp
    pub fn shows_time(&self) -> bool {
        self.show_time
    }

    /// Whether lines carry a severity tag
    pub fn shows_type(&self) -> bool {
        self.show_type
    }

    /// Whether timestamp and tag are colored
    pub fn is_colorized(&self) -> bool {
        self.colorize
    }

    /// Lowest severity that gets printed
    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Whether a message of `severity` would be printed
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Render a line exactly as it would be printed, minus colors
    pub fn format_plain(&self, severity: Severity, message: &str) -> String {
        let mut line = String::new();
        if self.show_time {
            line.push_str(&terminal::timestamp());
            line.push(' ');
        }
        if self.show_type {
            line.push_str(severity.tag());
            line.push(' ');
        }
        line.push_str(&self.label());
        line.push_str(message);
        line
    }

    fn label(&self) -> String {
        match self.short_space() {
            Some(space) => format!("[{}:{}]: ", space, self.file),
            None => format!("[{}]: ", self.file),
        }
    }

    fn emit(&self, severity: Severity, message: &str) {
        if !self.enabled(severity) {
            return;
        }
        // Best effort: a closed or broken stdout must not reach the caller.
        let _ = self
            .sink
            .with_writer(|out| self.write_line(out, severity, message));
    }

    fn write_line(&self, out: &mut dyn Write, severity: Severity, message: &str) -> io::Result<()> {
        if self.show_time {
            self.write_segment(out, Color::Gray, &terminal::timestamp())?;
            out.write_all(b" ")?;
        }
        if self.show_type {
            self.write_segment(out, severity.color(), severity.tag())?;
            out.write_all(b" ")?;
        }
        out.write_all(self.label().as_bytes())?;
        out.write_all(message.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }

    fn write_segment(&self, out: &mut dyn Write, color: Color, text: &str) -> io::Result<()> {
        if !self.colorize {
            return out.write_all(text.as_bytes());
        }
        let palette = self.effective_palette();
        palette.set_foreground(out, color)?;
        out.write_all(text.as_bytes())?;
        palette.reset(out)
    }

    /// In-memory sinks cannot carry out-of-band console colors; use ANSI there.
    fn effective_palette(&self) -> &dyn Palette {
        match self.sink {
            Sink::Memory(_) if !self.palette.writes_inline() => &AnsiPalette,
            _ => self.palette.as_ref(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::CaptureBuffer;
    use regex::Regex;

    fn capture(path: &str) -> (ConsoleLogger, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        let logger = ConsoleLogger::new(path)
            .with_palette(Arc::new(AnsiPalette))
            .with_sink(buffer.sink());
        (logger, buffer)
    }

    fn strip_ansi(text: &str) -> String {
        Regex::new(r"\x1b\[[0-9;]*m").unwrap().replace_all(text, "").into_owned()
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("src/net/socket.cpp"), "socket.cpp");
        assert_eq!(basename(r"C:\work\q1\main.cpp"), "main.cpp");
        assert_eq!(basename("mixed\\dir/file.rs"), "file.rs");
        assert_eq!(basename("plain.rs"), "plain.rs");
        assert_eq!(basename("trailing/"), "");
    }

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::default();
        assert_eq!(logger.file(), UNKNOWN_FILE);
        assert!(logger.shows_time());
        assert!(logger.shows_type());
        assert!(logger.is_colorized());
        assert_eq!(logger.space(), None);

        let custom = ConsoleLogger::new("/home/q1/project/app.log");
        assert_eq!(custom.file(), "app.log");
    }

    #[test]
    fn test_setters_chain_in_place() {
        let mut logger = ConsoleLogger::new("a.rs");
        logger
            .set_file("nested/dir/b.rs")
            .disable_time()
            .disable_type()
            .disable_colorization();

        assert_eq!(logger.file(), "b.rs");
        assert!(!logger.shows_time());
        assert!(!logger.shows_type());
        assert!(!logger.is_colorized());
    }

    #[test]
    fn test_default_line() {
        let (logger, buffer) = capture("logs/app.log");
        logger.info("hello");

        let raw = buffer.contents();
        assert!(raw.starts_with("\x1b[90m"));
        assert!(raw.contains("\x1b[32m INFO\x1b[0m [app.log]: hello\n"));

        let pattern = Regex::new(r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}  INFO \[app\.log\]: hello\n$").unwrap();
        assert!(pattern.is_match(&strip_ansi(&raw)), "unexpected line: {:?}", raw);
    }

    #[test]
    fn test_disable_time() {
        let (mut logger, buffer) = capture("app.log");
        logger.disable_time().disable_colorization();
        logger.info("x");

        assert_eq!(buffer.contents(), " INFO [app.log]: x\n");
    }

    #[test]
    fn test_disable_type() {
        let (mut logger, buffer) = capture("app.log");
        logger.disable_time().disable_type();
        logger.warn("careful");
        logger.error("broken");

        assert_eq!(buffer.lines(), vec!["[app.log]: careful", "[app.log]: broken"]);
    }

    #[test]
    fn test_disable_colorization_keeps_text() {
        let (mut colored, colored_out) = capture("app.log");
        colored.disable_time();
        colored.warn("same text");

        let (mut plain, plain_out) = capture("app.log");
        plain.disable_time().disable_colorization();
        plain.warn("same text");

        assert!(!plain_out.contents().contains('\x1b'));
        assert_eq!(plain_out.contents(), strip_ansi(&colored_out.contents()));
        assert_eq!(plain_out.contents(), " WARN [app.log]: same text\n");
    }

    #[test]
    fn test_severity_colors() {
        let (logger, buffer) = capture("app.log");
        let mut logger = logger.with_min_severity(Severity::Debug);
        logger.disable_time();

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        assert_eq!(
            buffer.lines(),
            vec![
                "\x1b[36mDEBUG\x1b[0m [app.log]: d",
                "\x1b[32m INFO\x1b[0m [app.log]: i",
                "\x1b[33m WARN\x1b[0m [app.log]: w",
                "\x1b[31mERROR\x1b[0m [app.log]: e",
            ]
        );
    }

    #[test]
    fn test_unknown_severity_code_renders_as_error() {
        let (mut logger, buffer) = capture("app.log");
        logger.disable_time();
        logger.log(Severity::from_code(7), "mystery");

        assert_eq!(buffer.contents(), "\x1b[31mERROR\x1b[0m [app.log]: mystery\n");
    }

    #[test]
    fn test_debug_filtered_below_threshold() {
        let (logger, buffer) = capture("app.log");
        let logger = logger.with_min_severity(Severity::Info);
        assert!(!logger.enabled(Severity::Debug));

        logger.debug("hidden");
        assert!(buffer.is_empty());

        logger.info("shown");
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_two_calls_two_lines() {
        let (logger, buffer) = capture("app.log");
        logger.info("one");
        logger.error("two");

        let stamp = Regex::new(r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2} ").unwrap();
        let lines: Vec<String> = buffer.lines().iter().map(|l| strip_ansi(l)).collect();
        assert_eq!(lines.len(), 2);
        assert!(stamp.is_match(&lines[0]) && lines[0].ends_with("[app.log]: one"));
        assert!(stamp.is_match(&lines[1]) && lines[1].ends_with("[app.log]: two"));
        assert!(buffer.contents().ends_with('\n'));
    }

    #[test]
    fn test_message_written_verbatim() {
        let (mut logger, buffer) = capture("app.log");
        logger.disable_time().disable_type();
        logger.info("tab\there\nnext %s {}");

        assert_eq!(buffer.contents(), "[app.log]: tab\there\nnext %s {}\n");
    }

    #[test]
    fn test_space_label() {
        let (mut logger, buffer) = capture("app.log");
        logger
            .set_space("networking-layer")
            .disable_time()
            .disable_type();
        assert_eq!(logger.short_space(), Some("networking"));

        logger.info("up");
        assert_eq!(buffer.contents(), "[networking:app.log]: up\n");
    }

    #[test]
    fn test_format_plain() {
        let mut logger = ConsoleLogger::new("app.log");
        logger.disable_time();
        assert_eq!(logger.format_plain(Severity::Warn, "w"), " WARN [app.log]: w");

        logger.disable_type();
        assert_eq!(logger.format_plain(Severity::Warn, "w"), "[app.log]: w");
    }

    #[test]
    fn test_default_threshold_follows_build() {
        let buffer = CaptureBuffer::new();
        let mut logger = ConsoleLogger::new("build.rs").with_sink(buffer.sink());
        logger.disable_time().disable_colorization();

        let expected = if cfg!(debug_assertions) {
            Severity::Debug
        } else {
            Severity::Info
        };
        assert_eq!(Severity::default_threshold(), expected);
        assert_eq!(logger.min_severity(), expected);

        logger.debug("x");
        if cfg!(debug_assertions) {
            assert_eq!(buffer.contents(), "DEBUG [build.rs]: x\n");
        } else {
            assert!(buffer.is_empty());
        }
    }

    #[derive(Debug)]
    struct OutOfBandPalette;

    impl Palette for OutOfBandPalette {
        fn name(&self) -> &str {
            "out-of-band"
        }

        fn writes_inline(&self) -> bool {
            false
        }

        fn set_foreground(&self, out: &mut dyn Write, _color: Color) -> io::Result<()> {
            out.write_all(b"<set>")
        }

        fn reset(&self, out: &mut dyn Write) -> io::Result<()> {
            out.write_all(b"<reset>")
        }
    }

    #[test]
    fn test_memory_sink_falls_back_to_ansi() {
        let buffer = CaptureBuffer::new();
        let mut logger = ConsoleLogger::new("app.log")
            .with_palette(Arc::new(OutOfBandPalette))
            .with_sink(buffer.sink());
        logger.disable_time();
        logger.warn("captured");

        assert_eq!(buffer.contents(), "\x1b[33m WARN\x1b[0m [app.log]: captured\n");
    }
}
