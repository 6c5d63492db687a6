//! Character cursor over a [`SourceMap`].
//!
//! The cursor is a borrowed map plus a [`Position`]; it is [`Copy`], enabling
//! cheap state snapshots for backtracking.
//!
//! # Buffer boundaries
//!
//! When the current buffer runs out and another buffer follows, [`peek`]
//! reports [`Peek::BufferEnd`] instead of silently continuing. A [`skip`] at
//! that point moves to the first character of the next buffer and reports
//! the crossing. Only [`Peek::End`] means there is no input left anywhere.
//!
//! [`peek`]: Cursor::peek
//! [`skip`]: Cursor::skip

use crate::{Location, Position, SourceMap};

/// What the cursor sees at its current position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Peek {
    /// A character in the current buffer.
    Char(char),
    /// The current buffer is exhausted; a later buffer is available.
    BufferEnd,
    /// No characters remain in any buffer.
    End,
}

impl Peek {
    /// The character, if any.
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Peek::Char(c) => Some(c),
            Peek::BufferEnd | Peek::End => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    sources: &'a SourceMap,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(sources: &'a SourceMap) -> Self {
        Cursor {
            sources,
            pos: Position::default(),
        }
    }

    pub fn sources(&self) -> &'a SourceMap {
        self.sources
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Restore a previously saved position.
    #[inline]
    pub fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn location(&self) -> Location {
        self.sources.location(self.pos)
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Peek {
        let Some(source) = self.sources.get(self.pos.source_index) else {
            return Peek::End;
        };
        if let Some(&c) = source.chars().get(self.pos.raw) {
            return Peek::Char(c);
        }
        if self.pos.source_index + 1 < self.sources.len() {
            Peek::BufferEnd
        } else {
            Peek::End
        }
    }

    /// Advance past the current character.
    ///
    /// A newline bumps the line and resets the column. At
    /// [`Peek::BufferEnd`] the cursor moves to the start of the next buffer
    /// and `true` is returned; otherwise the result is `false`. At
    /// [`Peek::End`] nothing happens.
    pub fn skip(&mut self) -> bool {
        match self.peek() {
            Peek::Char(c) => {
                self.pos.raw += 1;
                if c == '\n' {
                    self.pos.line += 1;
                    self.pos.column = 1;
                } else {
                    self.pos.column += 1;
                }
                false
            }
            Peek::BufferEnd => {
                self.pos = Position::start_of(self.pos.source_index + 1);
                true
            }
            Peek::End => false,
        }
    }

    /// `peek` followed by `skip`; returns what was peeked.
    pub fn get(&mut self) -> Peek {
        let peeked = self.peek();
        self.skip();
        peeked
    }

    /// Consume the next character if it satisfies `pred`.
    ///
    /// Never crosses a buffer boundary.
    pub fn eat_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Peek::Char(c) if pred(c) => {
                self.skip();
                Some(c)
            }
            _ => None,
        }
    }
}
