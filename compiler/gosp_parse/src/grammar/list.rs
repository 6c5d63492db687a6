use gosp_diagnostic::ErrorCode;
use gosp_eval::InterpreterState;
use gosp_ir::{ExprType, Expression};
use gosp_lexer::TokenTag;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `[item ...]`, every item the same type as the first.
    pub(crate) fn parse_list(&mut self, state: &mut InterpreterState) -> Result<Expression, ParseError> {
        let open = self.expect(TokenTag::OpenBracket)?;
        let mut items = Vec::new();
        let mut element: Option<ExprType> = None;
        loop {
            let Some(token) = self.peek_token() else {
                return Err(self.unclosed(&open));
            };
            if token.tag() == TokenTag::CloseBracket {
                self.bump();
                return Ok(Expression::List(items));
            }
            let snapshot = self.snapshot(state);
            let item = self.parse_expression(state)?;
            let actual = state.simple_type_of(&item);
            match &element {
                None => element = Some(actual),
                Some(expected) if expected.same(&actual) => {}
                Some(expected) => {
                    let error = ParseError::new(
                        ErrorCode::E2001,
                        format!("Expected {expected}, got {actual}"),
                        self.location_of(token.position),
                    );
                    self.restore(state, snapshot);
                    return Err(error);
                }
            }
            items.push(item);
        }
    }
}
