use std::sync::Arc;

use gosp_diagnostic::ErrorCode;
use gosp_eval::InterpreterState;
use gosp_ir::{ExprType, Expression};
use gosp_lexer::{Token, TokenTag};
use gosp_lexer_core::Position;

use crate::{ParseError, ParseOutcome, Parser};

impl Parser<'_> {
    /// `(name arg ...)`
    ///
    /// Fixed parameters take exactly one argument each; a variadic tail takes
    /// the rest. Every argument's value type must be accepted by its
    /// parameter type.
    pub(crate) fn parse_call(&mut self, state: &mut InterpreterState) -> ParseOutcome<Expression> {
        match self.expect(TokenTag::OpenParen) {
            Ok(open) => ParseOutcome::committed(self.parse_call_rest(state, &open)),
            Err(error) => ParseOutcome::empty_err(error),
        }
    }

    fn parse_call_rest(
        &mut self,
        state: &mut InterpreterState,
        open: &Token,
    ) -> Result<Expression, ParseError> {
        let (name, name_at) = self.expect_identifier()?;
        let Some(function) = state.find_function(&name).cloned() else {
            return Err(ParseError::new(
                ErrorCode::E1006,
                format!("Unknown function '{name}'"),
                self.location_of(name_at),
            ));
        };
        let signature = Arc::clone(&function.signature);
        let mut args = Vec::with_capacity(signature.arity());

        for expected in &signature.fixed {
            let Some(token) = self.peek_token() else {
                return Err(self.unclosed(open));
            };
            if token.tag() == TokenTag::CloseParen {
                return Err(ParseError::new(
                    ErrorCode::E2003,
                    format!(
                        "Too few arguments for {name}: expected {}, got {}",
                        signature.arity(),
                        args.len()
                    ),
                    self.location_of(token.position),
                ));
            }
            args.push(self.parse_argument(state, &name, expected, token.position)?);
        }

        if let Some(variadic) = &signature.variadic {
            while let Some(token) = self.peek_token() {
                if token.tag() == TokenTag::CloseParen {
                    break;
                }
                args.push(self.parse_argument(state, &name, variadic, token.position)?);
            }
        }

        match self.peek_token() {
            None => Err(self.unclosed(open)),
            Some(token) if token.tag() == TokenTag::CloseParen => {
                self.bump();
                Ok(Expression::Func { function, args })
            }
            Some(token) => Err(ParseError::new(
                ErrorCode::E2002,
                format!(
                    "Too many arguments for {name}: expected {}",
                    signature.arity()
                ),
                self.location_of(token.position),
            )),
        }
    }

    /// One argument checked against `expected`; a mismatch rolls back to `at`.
    fn parse_argument(
        &mut self,
        state: &mut InterpreterState,
        function: &str,
        expected: &ExprType,
        at: Position,
    ) -> Result<Expression, ParseError> {
        let snapshot = self.snapshot(state);
        let arg = self.parse_expression(state)?;
        let actual = state.simple_type_of(&arg);
        if expected.accepts(&actual) {
            return Ok(arg);
        }
        self.restore(state, snapshot);
        Err(ParseError::new(
            ErrorCode::E2001,
            format!("{function}: Expected {expected}, got {actual}"),
            self.location_of(at),
        ))
    }
}
