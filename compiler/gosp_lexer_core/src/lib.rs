//! Low-level source model for gosp.
//!
//! A [`SourceMap`] owns an ordered list of named character buffers (files or
//! inline snippets). A [`Cursor`] walks those buffers one character at a time
//! and is [`Copy`], so saving and restoring it is a plain assignment. That is
//! the whole backtracking story at this layer: callers snapshot a
//! [`Position`] before a speculative scan and put it back on failure.
//!
//! Buffer boundaries are visible to callers through [`Peek::BufferEnd`], so
//! each scanner can decide whether crossing into the next buffer counts as
//! "more input" (whitespace skipping) or as the end of a token (identifiers,
//! numbers).

mod cursor;
mod location;
mod source_map;

pub use cursor::{Cursor, Peek};
pub use location::{Location, Position};
pub use source_map::{Source, SourceMap};
