//! Named character buffers.
//!
//! Buffers are decoded to `char`s once when added, so the cursor indexes
//! characters directly and columns count characters rather than bytes.

use std::io;
use std::path::Path;

use crate::{Cursor, Location, Position};

/// One named buffer: a file on disk or an inline snippet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    name: String,
    chars: Vec<char>,
}

impl Source {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        Source {
            name: name.into(),
            chars: text.chars().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text of 1-based `line`, without its trailing newline (or `\r\n`).
    pub fn line_text(&self, line: u32) -> Option<String> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        let mut text: String = self
            .chars
            .split(|&c| c == '\n')
            .nth(index)?
            .iter()
            .collect();
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }
}

/// Ordered list of buffers scanned as one logical input.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    sources: Vec<Source>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap::default()
    }

    /// Map holding a single inline snippet.
    pub fn single(name: impl Into<String>, text: &str) -> Self {
        let mut map = SourceMap::new();
        map.add_named(name, text);
        map
    }

    /// Append an inline snippet; returns its buffer index.
    pub fn add_named(&mut self, name: impl Into<String>, text: &str) -> usize {
        self.sources.push(Source::new(name, text));
        self.sources.len() - 1
    }

    /// Append the contents of a file, named by its path.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> io::Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Ok(self.add_named(path.display().to_string(), &text))
    }

    pub fn get(&self, index: usize) -> Option<&Source> {
        self.sources.get(index)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    /// Cursor positioned at the first character of the first buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Resolve a position to a named location.
    pub fn location(&self, position: Position) -> Location {
        let name = self
            .get(position.source_index)
            .map_or("<unknown>", Source::name);
        Location::new(name, position)
    }

    /// Raw source text between two positions.
    ///
    /// The range may span several buffers, in which case the pieces are
    /// concatenated. An `end` before `start` yields an empty string.
    pub fn fragment(&self, start: Position, end: Position) -> String {
        let mut out = String::new();
        if (end.source_index, end.raw) <= (start.source_index, start.raw) {
            return out;
        }
        for index in start.source_index..=end.source_index {
            let Some(source) = self.get(index) else {
                break;
            };
            let from = if index == start.source_index { start.raw } else { 0 };
            let to = if index == end.source_index {
                end.raw
            } else {
                source.len()
            };
            let to = to.min(source.len());
            if from < to {
                out.extend(&source.chars()[from..to]);
            }
        }
        out
    }

    /// Text of `line` in buffer `source_index`.
    pub fn line_text(&self, source_index: usize, line: u32) -> Option<String> {
        self.get(source_index)?.line_text(line)
    }
}
