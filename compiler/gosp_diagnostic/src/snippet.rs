//! Plain-text source snippets for transcripts.
//!
//! ```text
//! (sq 1 2)
//!        ^~
//! post-request:1:8: Too many arguments for sq
//! ```

use std::fmt::Write;

use crate::Diagnostic;

/// Write `line`, then a caret under `column` (1-based, clamped to 1)
/// followed by `underline_len - 1` tildes.
///
/// `underline_len` is the character length of the skipped fragment; zero and
/// one both draw a lone caret.
pub fn write_snippet(out: &mut String, line: &str, column: u32, underline_len: usize) {
    let column = column.max(1) as usize;
    out.push_str(line);
    out.push('\n');
    out.extend(std::iter::repeat(' ').take(column - 1));
    out.push('^');
    out.extend(std::iter::repeat('~').take(underline_len.saturating_sub(1)));
    out.push('\n');
}

/// Write the snippet (when the line is known) and the `location: message`
/// trailer for one diagnostic.
pub fn write_transcript_error(
    out: &mut String,
    diagnostic: &Diagnostic,
    line: Option<&str>,
    underline_len: usize,
) {
    if let Some(line) = line {
        write_snippet(out, line, diagnostic.location.column, underline_len);
    }
    let _ = writeln!(out, "{diagnostic}");
}
