//! Token types.

use std::fmt;

use gosp_lexer_core::Position;

use crate::LexError;

/// Payload-free token discriminant.
///
/// Used wherever only the shape of a token matters: `expect`, error
/// messages, and delimiter matching during recovery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenTag {
    None,
    Id,
    Str,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Int,
    Double,
    Error,
}

impl TokenTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenTag::None => "none",
            TokenTag::Id => "id",
            TokenTag::Str => "str",
            TokenTag::OpenParen => "(",
            TokenTag::CloseParen => ")",
            TokenTag::OpenBrace => "{",
            TokenTag::CloseBrace => "}",
            TokenTag::OpenBracket => "[",
            TokenTag::CloseBracket => "]",
            TokenTag::Comma => ",",
            TokenTag::Int => "int",
            TokenTag::Double => "double",
            TokenTag::Error => "error",
        }
    }

    /// The closing delimiter matching an opening one.
    pub fn closing(self) -> Option<TokenTag> {
        match self {
            TokenTag::OpenParen => Some(TokenTag::CloseParen),
            TokenTag::OpenBrace => Some(TokenTag::CloseBrace),
            TokenTag::OpenBracket => Some(TokenTag::CloseBracket),
            _ => None,
        }
    }

    /// The opening delimiter matching a closing one.
    pub fn opening(self) -> Option<TokenTag> {
        match self {
            TokenTag::CloseParen => Some(TokenTag::OpenParen),
            TokenTag::CloseBrace => Some(TokenTag::OpenBrace),
            TokenTag::CloseBracket => Some(TokenTag::OpenBracket),
            _ => None,
        }
    }

    #[inline]
    pub fn is_open_delim(self) -> bool {
        self.closing().is_some()
    }

    #[inline]
    pub fn is_close_delim(self) -> bool {
        self.opening().is_some()
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its decoded payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Id(String),
    Str(String),
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Int(i64),
    Double(f64),
    Error(LexError),
}

impl TokenKind {
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Id(_) => TokenTag::Id,
            TokenKind::Str(_) => TokenTag::Str,
            TokenKind::OpenParen => TokenTag::OpenParen,
            TokenKind::CloseParen => TokenTag::CloseParen,
            TokenKind::OpenBrace => TokenTag::OpenBrace,
            TokenKind::CloseBrace => TokenTag::CloseBrace,
            TokenKind::OpenBracket => TokenTag::OpenBracket,
            TokenKind::CloseBracket => TokenTag::CloseBracket,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Double(_) => TokenTag::Double,
            TokenKind::Error(_) => TokenTag::Error,
        }
    }

    /// Single-character punctuation.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        Some(match c {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ',' => TokenKind::Comma,
            _ => return None,
        })
    }
}

/// A token and the position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    /// The identifier text, if this is an identifier.
    pub fn as_id(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Id(name) => Some(name),
            _ => None,
        }
    }
}
