//! Parser for gosp.
//!
//! Parsing and type checking are one pass. Every expression the parser
//! builds is typed against the caller's [`InterpreterState`] as it goes, so
//! a call with a mistyped argument is a parse error and evaluation never
//! fails.
//!
//! # Backtracking
//!
//! `(` may open a `let`, a `defun` or a call. The forms are tried in that
//! order; each attempt runs from a [`ParserSnapshot`] of the cursor, the
//! binding depth and the function count, and a failed attempt restores all
//! three before the next one runs. See [`ParseOutcome`] for when a failure
//! stops the search instead.
//!
//! The state is passed to every parse call rather than owned by the parser:
//! one state outlives many parsers in a session.

mod error;
mod grammar;
mod outcome;
mod recovery;
mod snapshot;

use gosp_diagnostic::ErrorCode;
use gosp_lexer::{Lexer, Token, TokenKind, TokenTag};
use gosp_lexer_core::{Location, Position, SourceMap};

pub use error::ParseError;
pub use gosp_eval::InterpreterState;
pub use outcome::ParseOutcome;
pub use snapshot::ParserSnapshot;

/// Recursive descent parser over a [`SourceMap`].
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(sources: &'a SourceMap) -> Self {
        Parser {
            lexer: Lexer::new(sources),
        }
    }

    pub fn sources(&self) -> &'a SourceMap {
        self.lexer.sources()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.lexer.position()
    }

    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.lexer.set_position(position);
    }

    /// Location of the cursor.
    pub fn location(&self) -> Location {
        self.lexer.location()
    }

    pub fn location_of(&self, position: Position) -> Location {
        self.sources().location(position)
    }

    /// Skip whitespace, crossing buffers. `false` once the input is exhausted.
    pub fn skip_whitespace(&mut self) -> bool {
        self.lexer.skip_whitespace()
    }

    // --- Token access ---

    /// The next token of the current buffer, without consuming it.
    pub fn peek_token(&self) -> Option<Token> {
        let mut lookahead = self.lexer;
        lookahead.next_token()
    }

    /// Consume and return the next token of the current buffer.
    pub fn next_token(&mut self) -> Option<Token> {
        self.lexer.next_token()
    }

    #[inline]
    fn bump(&mut self) {
        self.lexer.next_token();
    }

    /// Consume a token of kind `tag`.
    ///
    /// An error token in its place reports the lexical error instead.
    pub fn expect(&mut self, tag: TokenTag) -> Result<Token, ParseError> {
        match self.next_token() {
            Some(token) if token.tag() == tag => Ok(token),
            Some(token) => Err(self.unexpected(&token, tag)),
            None => Err(ParseError::expected(tag, TokenTag::None, self.location())),
        }
    }

    /// Consume an identifier, returning its text and position.
    pub fn expect_identifier(&mut self) -> Result<(String, Position), ParseError> {
        match self.next_token() {
            Some(Token {
                kind: TokenKind::Id(name),
                position,
            }) => Ok((name, position)),
            Some(token) => {
                let mut error = self.unexpected(&token, TokenTag::Id);
                if error.code == ErrorCode::E1001 {
                    error.code = ErrorCode::E1004;
                }
                Err(error)
            }
            None => Err(ParseError::new(
                ErrorCode::E1004,
                format!("Expected {}, got {}", TokenTag::Id, TokenTag::None),
                self.location(),
            )),
        }
    }

    /// Consume the identifier `keyword` if it is next.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        match self.peek_token() {
            Some(token) if token.as_id() == Some(keyword) => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// Consume the delimiter closing `open`.
    ///
    /// Running out of tokens reports the unclosed delimiter at `open`.
    pub fn expect_close(&mut self, open: &Token) -> Result<(), ParseError> {
        let close = open.tag().closing().unwrap_or(TokenTag::CloseParen);
        match self.peek_token() {
            Some(token) if token.tag() == close => {
                self.bump();
                Ok(())
            }
            Some(token) => Err(self.unexpected(&token, close)),
            None => Err(self.unclosed(open)),
        }
    }

    /// Succeed only if nothing but whitespace is left in the current buffer.
    pub fn expect_end_of_buffer(&self) -> Result<(), ParseError> {
        match self.peek_token() {
            None => Ok(()),
            Some(token) => Err(ParseError::expected(
                "end of input",
                token.tag(),
                self.location_of(token.position),
            )),
        }
    }

    fn unexpected(&self, token: &Token, expected: TokenTag) -> ParseError {
        let location = self.location_of(token.position);
        match &token.kind {
            TokenKind::Error(error) => ParseError::from_lex(error, location),
            _ => ParseError::expected(expected, token.tag(), location),
        }
    }

    fn unclosed(&self, open: &Token) -> ParseError {
        let what = match open.tag() {
            TokenTag::OpenBracket => "brackets",
            TokenTag::OpenBrace => "braces",
            _ => "parens",
        };
        ParseError::unclosed(what, self.location_of(open.position))
    }
}

#[cfg(test)]
mod tests;
