//! Positions inside a [`SourceMap`](crate::SourceMap).

use std::fmt;

/// Where the cursor is: buffer index, raw character offset, and the
/// human-facing line/column (both 1-based).
///
/// `Position` is `Copy`; a saved position is an independent snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub source_index: usize,
    pub raw: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of buffer `source_index`.
    pub const fn start_of(source_index: usize) -> Self {
        Position {
            source_index,
            raw: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start_of(0)
    }
}

/// A resolved position: the buffer name plus line and column.
///
/// The buffer index and raw offset are kept for fragment extraction only;
/// they are not part of the serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    pub source: String,
    pub line: u32,
    pub column: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub source_index: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub raw: usize,
}

impl Location {
    pub fn new(source: impl Into<String>, position: Position) -> Self {
        Location {
            source: source.into(),
            line: position.line,
            column: position.column,
            source_index: position.source_index,
            raw: position.raw,
        }
    }

    /// The cursor position this location was resolved from.
    pub fn position(&self) -> Position {
        Position {
            source_index: self.source_index,
            raw: self.raw,
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}
