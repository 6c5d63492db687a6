//! Hand-written scanner.
//!
//! Recognition order at each token start: punctuation, string, number,
//! identifier, and finally an [`LexError::UnknownToken`] error token.

use gosp_lexer_core::{Cursor, Location, Peek, Position, SourceMap};
use tracing::trace;

use crate::{LexError, Token, TokenKind};

/// Non-alphanumeric characters allowed anywhere in an identifier.
pub const IDENT_SPECIAL_CHARS: &[char] = &[
    '+', '-', '/', '*', '.', ':', '_', '=', '!', '<', '>', '|', '&',
];

/// Whether `c` may appear in an identifier (first position included).
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || IDENT_SPECIAL_CHARS.contains(&c)
}

/// Token scanner over a [`SourceMap`].
///
/// `next_token` never looks past the current buffer; only
/// [`Lexer::skip_whitespace`] moves into the next one.
#[derive(Copy, Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(sources: &'a SourceMap) -> Self {
        Lexer {
            cursor: sources.cursor(),
        }
    }

    pub fn sources(&self) -> &'a SourceMap {
        self.cursor.sources()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.cursor.set_position(position);
    }

    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    fn skip_spaces_in_buffer(&mut self) -> Peek {
        loop {
            match self.cursor.peek() {
                Peek::Char(c) if c.is_whitespace() => {
                    self.cursor.skip();
                }
                other => return other,
            }
        }
    }

    /// Skip whitespace, moving into later buffers as they run out.
    ///
    /// Returns `false` once no input remains anywhere.
    pub fn skip_whitespace(&mut self) -> bool {
        loop {
            match self.skip_spaces_in_buffer() {
                Peek::Char(_) => return true,
                Peek::BufferEnd => {
                    self.cursor.skip();
                }
                Peek::End => return false,
            }
        }
    }

    /// Scan the next token of the current buffer.
    ///
    /// Returns `None` when the buffer (or the whole input) is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        let Peek::Char(c) = self.skip_spaces_in_buffer() else {
            return None;
        };
        let start = self.cursor.position();
        let kind = if let Some(kind) = TokenKind::punctuation(c) {
            self.cursor.skip();
            kind
        } else if c == '"' {
            self.string()
        } else if let Some(kind) = self.number() {
            kind
        } else if let Some(name) = self.identifier() {
            TokenKind::Id(name)
        } else {
            self.cursor.skip();
            TokenKind::Error(LexError::UnknownToken { found: c })
        };
        trace!(tag = %kind.tag(), line = start.line, column = start.column, "token");
        Some(Token::new(kind, start))
    }

    /// Every token of every buffer, in order.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while self.skip_whitespace() {
            if let Some(token) = self.next_token() {
                tokens.push(token);
            }
        }
        tokens
    }

    /// `"..."` with `\" \\ \r \n` escapes; must close on the same line.
    fn string(&mut self) -> TokenKind {
        self.cursor.skip();
        let mut text = String::new();
        loop {
            let Peek::Char(c) = self.cursor.peek() else {
                return TokenKind::Error(LexError::UnclosedString);
            };
            self.cursor.skip();
            match c {
                '"' => return TokenKind::Str(text),
                '\n' => return TokenKind::Error(LexError::UnclosedString),
                '\\' => {
                    let Peek::Char(escape) = self.cursor.peek() else {
                        return TokenKind::Error(LexError::UnclosedString);
                    };
                    self.cursor.skip();
                    match escape {
                        '"' => text.push('"'),
                        '\\' => text.push('\\'),
                        'r' => text.push('\r'),
                        'n' => text.push('\n'),
                        '\n' => return TokenKind::Error(LexError::UnclosedString),
                        escape => return TokenKind::Error(LexError::UnknownEscape { escape }),
                    }
                }
                c => text.push(c),
            }
        }
    }

    /// `-?digits(.digits)?` where either digit run may be empty, but not both.
    ///
    /// On a mismatch the cursor is restored and `None` returned, so the same
    /// text can be retried as an identifier (`-`, `.`, `1.2.3`).
    fn number(&mut self) -> Option<TokenKind> {
        let saved = self.cursor.position();
        let negative = self.cursor.eat_if(|c| c == '-').is_some();
        let mut whole = String::new();
        let mut fraction = String::new();
        let mut floating = false;
        loop {
            match self.cursor.peek() {
                Peek::Char('.') => {
                    if floating {
                        self.cursor.set_position(saved);
                        return None;
                    }
                    floating = true;
                }
                Peek::Char(c) if c.is_ascii_digit() => {
                    if floating {
                        fraction.push(c);
                    } else {
                        whole.push(c);
                    }
                }
                _ => break,
            }
            self.cursor.skip();
        }
        if whole.is_empty() && fraction.is_empty() {
            self.cursor.set_position(saved);
            return None;
        }

        let mut text = String::with_capacity(whole.len() + fraction.len() + 3);
        if negative {
            text.push('-');
        }
        text.push_str(if whole.is_empty() { "0" } else { &whole });
        if !floating {
            return Some(match text.parse::<i64>() {
                Ok(value) => TokenKind::Int(value),
                Err(err) => TokenKind::Error(LexError::InvalidNumber {
                    text,
                    reason: err.to_string(),
                }),
            });
        }
        text.push('.');
        text.push_str(if fraction.is_empty() { "0" } else { &fraction });
        Some(match text.parse::<f64>() {
            Ok(value) => TokenKind::Double(value),
            Err(err) => TokenKind::Error(LexError::InvalidNumber {
                text,
                reason: err.to_string(),
            }),
        })
    }

    fn identifier(&mut self) -> Option<String> {
        let mut name = String::new();
        while let Some(c) = self.cursor.eat_if(is_ident_char) {
            name.push(c);
        }
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests;
