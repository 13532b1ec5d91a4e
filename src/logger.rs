//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro gated on the global verbose flag
//! - `Reporter` trait, the sink the generate pipeline reports through
//!
//! # Example
//!
//! ```ignore
//! log!("scan"; "found {} categories", count);
//! debug!("scan"; "skipping {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "manifest" => Style::new().bright_blue(),
        "done" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    paint(&format!("[{module}]"), style.bold())
}

/// Style `text` unless stdout colors are off (`--color never` or no TTY).
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.style(style))
        .to_string()
}

// ============================================================================
// Reporter
// ============================================================================

/// Severity of a reported status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
}

/// Human-facing status sink for the manifest pipeline.
///
/// The pipeline never prints directly, so tests can capture what
/// would have reached the terminal.
pub trait Reporter {
    fn report(&mut self, level: Level, message: &str);

    fn debug(&mut self, message: &str) {
        self.report(Level::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.report(Level::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.report(Level::Warning, message);
    }
}

/// Reporter writing to stdout through [`log`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, level: Level, message: &str) {
        match level {
            Level::Debug => crate::debug!("manifest"; "{}", paint(message, Style::new().dimmed())),
            Level::Info => log("manifest", message),
            Level::Success => log("done", &format!("{} {message}", paint("✓", Style::new().green()))),
            Level::Warning => {
                log("warning", &format!("{} {message}", paint("⚠", Style::new().yellow())));
            }
        }
    }
}

/// Reporter keeping every line in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub lines: Vec<(Level, String)>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&mut self, level: Level, message: &str) {
        self.lines.push((level, message.to_string()));
    }
}

// ============================================================================
// Tests
// ============================================================================
