//! Tokenizer for gosp.
//!
//! [`Lexer`] turns the characters under a [`gosp_lexer_core::Cursor`] into
//! [`Token`]s one at a time. The lexer holds nothing but the cursor, so it is
//! `Copy`: the parser saves and restores it wholesale when backtracking.
//!
//! Lexing never fails hard. A bad character, an unterminated string or an
//! unknown escape becomes a [`TokenKind::Error`] carrying a [`LexError`], with
//! the cursor already past the offending text so the caller can resynchronize.

mod lex_error;
mod lexer;
mod token;

pub use lex_error::LexError;
pub use lexer::{is_ident_char, Lexer, IDENT_SPECIAL_CHARS};
pub use token::{Token, TokenKind, TokenTag};
