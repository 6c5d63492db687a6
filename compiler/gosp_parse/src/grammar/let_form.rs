use gosp_eval::InterpreterState;
use gosp_ir::Expression;
use gosp_lexer::Token;

use crate::{ParseError, ParseOutcome, Parser};

impl Parser<'_> {
    /// `(let name value body)`
    ///
    /// `name` must not be taken by any function or live binding. The body is
    /// type-checked with a placeholder of the value's type bound to `name`.
    pub(crate) fn parse_let(&mut self, state: &mut InterpreterState) -> ParseOutcome<Expression> {
        match self.open_keyword_form("let") {
            Ok(open) => ParseOutcome::committed(self.parse_let_rest(state, &open)),
            Err(error) => ParseOutcome::empty_err(error),
        }
    }

    fn parse_let_rest(
        &mut self,
        state: &mut InterpreterState,
        open: &Token,
    ) -> Result<Expression, ParseError> {
        let (name, name_at) = self.expect_identifier()?;
        if state.is_defined(&name) {
            return Err(ParseError::already_defined(&name, self.location_of(name_at)));
        }
        let value = self.parse_expression(state)?;
        let bound = state.simple_type_of(&value);
        let body = state.with_binding(name.clone(), Expression::zero_value(&bound), |scoped| {
            self.parse_expression(scoped)
        })?;
        self.expect_close(open)?;
        Ok(Expression::Let {
            name,
            value: Box::new(value),
            body: Box::new(body),
        })
    }
}
