//! Terminal Emitter
//!
//! Human-readable diagnostic output for the CLI with optional ANSI color.

use std::io::{self, Write};

use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// For `Auto` mode, `is_tty` decides. Ignored for `Always` and `Never`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// Emit one diagnostic.
    ///
    /// `line` is the source line the diagnostic points into, when known.
    pub fn emit(&mut self, diagnostic: &Diagnostic, line: Option<&str>) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_colored("  --> ", colors::SECONDARY);
        let _ = writeln!(self.writer, "{}", diagnostic.location);

        if let Some(line) = line {
            let gutter = diagnostic.location.line.to_string();
            let pad = " ".repeat(gutter.len());
            self.write_colored(&format!("{pad} |"), colors::SECONDARY);
            let _ = writeln!(self.writer);
            self.write_colored(&format!("{gutter} | "), colors::SECONDARY);
            let _ = writeln!(self.writer, "{line}");
            self.write_colored(&format!("{pad} | "), colors::SECONDARY);
            let column = diagnostic.location.column.max(1) as usize;
            let _ = write!(self.writer, "{}", " ".repeat(column - 1));
            self.write_colored("^", colors::ERROR);
            let _ = writeln!(self.writer);
        }
        let _ = writeln!(self.writer);
    }

    /// `error: aborting due to N previous error(s)`.
    pub fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": aborting due to {error_count} previous error{}",
            plural_s(error_count)
        );
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Recover the writer, for tests and buffered callers.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
