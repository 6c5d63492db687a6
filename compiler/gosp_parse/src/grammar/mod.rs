//! Grammar productions.
//!
//! ```text
//! expression := id | str | int | double | list | paren-form
//! paren-form := let | defun | call
//! let        := "(" "let" id expression expression ")"
//! defun      := "(" "defun" id "(" (id type-name)* ")" expression ")"
//! call       := "(" id expression* ")"
//! list       := "[" expression* "]"
//! ```

mod call;
mod defun;
mod let_form;
mod list;

use gosp_diagnostic::ErrorCode;
use gosp_eval::InterpreterState;
use gosp_ir::Expression;
use gosp_lexer::{Token, TokenKind, TokenTag};
use gosp_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseOutcome, Parser};

type ParenForm<'a> = fn(&mut Parser<'a>, &mut InterpreterState) -> ParseOutcome<Expression>;

impl<'a> Parser<'a> {
    /// Parse and type-check one expression of the current buffer.
    ///
    /// On error the cursor, the binding stack and the function registry are
    /// exactly as they were on entry.
    pub fn parse_expression(
        &mut self,
        state: &mut InterpreterState,
    ) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.transaction(state, Self::parse_expression_inner))
    }

    fn parse_expression_inner(
        &mut self,
        state: &mut InterpreterState,
    ) -> Result<Expression, ParseError> {
        let Some(token) = self.peek_token() else {
            return Err(ParseError::new(
                ErrorCode::E1002,
                format!("Expected expression, got {}", TokenTag::None),
                self.location(),
            ));
        };
        let tag = token.tag();
        let location = self.location_of(token.position);
        let literal = match token.kind {
            TokenKind::Id(name) => Expression::Id(name),
            TokenKind::Str(text) => Expression::Str(text),
            TokenKind::Int(value) => Expression::Int(value),
            TokenKind::Double(value) => Expression::Double(value),
            TokenKind::Error(error) => {
                self.bump();
                return Err(ParseError::from_lex(&error, location));
            }
            TokenKind::OpenParen => return self.parse_paren_form(state),
            TokenKind::OpenBracket => return self.parse_list(state),
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1001,
                    format!("Unknown token: {tag}"),
                    location,
                ))
            }
        };
        self.bump();
        Ok(literal)
    }

    /// Try `let`, `defun`, then a call, rolling back between attempts.
    fn parse_paren_form(&mut self, state: &mut InterpreterState) -> Result<Expression, ParseError> {
        let forms: [(&str, ParenForm<'a>); 3] = [
            ("let", Self::parse_let),
            ("defun", Self::parse_defun),
            ("call", Self::parse_call),
        ];
        let snapshot = self.snapshot(state);
        let mut last_error = None;
        for (form, parse) in forms {
            trace!(form, "attempt");
            match parse(self, state) {
                ParseOutcome::ConsumedOk { value } => return Ok(value),
                ParseOutcome::ConsumedErr { error } => return Err(error),
                ParseOutcome::EmptyErr { error } => {
                    trace!(form, "rollback");
                    self.restore(state, snapshot);
                    last_error = Some(error);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| {
            ParseError::new(
                ErrorCode::E1001,
                format!("Unknown token: {}", TokenTag::OpenParen),
                self.location_of(snapshot.position),
            )
        }))
    }

    /// `(` followed by the identifier `keyword`.
    ///
    /// A failure here means the form is something else.
    fn open_keyword_form(&mut self, keyword: &str) -> Result<Token, ParseError> {
        let open = self.expect(TokenTag::OpenParen)?;
        if self.eat_keyword(keyword) {
            return Ok(open);
        }
        let found = self.peek_token().map_or(TokenTag::None, |token| token.tag());
        Err(ParseError::expected(keyword, found, self.location()))
    }
}
