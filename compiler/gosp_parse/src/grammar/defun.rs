use gosp_diagnostic::ErrorCode;
use gosp_eval::InterpreterState;
use gosp_ir::{ExprType, Expression, Function, Param};
use gosp_lexer::{Token, TokenTag};
use tracing::debug;

use crate::{ParseError, ParseOutcome, Parser};

impl Parser<'_> {
    /// `(defun name (param type ...) body)`
    ///
    /// Registers the function and evaluates to `None`. The return type is
    /// the type of the body, checked with placeholder parameters bound.
    pub(crate) fn parse_defun(&mut self, state: &mut InterpreterState) -> ParseOutcome<Expression> {
        match self.open_keyword_form("defun") {
            Ok(open) => ParseOutcome::committed(self.parse_defun_rest(state, &open)),
            Err(error) => ParseOutcome::empty_err(error),
        }
    }

    fn parse_defun_rest(
        &mut self,
        state: &mut InterpreterState,
        open: &Token,
    ) -> Result<Expression, ParseError> {
        let (name, name_at) = self.expect_identifier()?;
        if state.is_defined(&name) {
            return Err(ParseError::already_defined(&name, self.location_of(name_at)));
        }
        let params = self.parse_params(state, &name)?;
        let placeholders: Vec<(String, Expression)> = params
            .iter()
            .map(|param| (param.name.clone(), Expression::zero_value(&param.ty)))
            .collect();
        let (body, returns) = state.with_bindings(placeholders, |scoped| {
            let body = self.parse_expression(scoped)?;
            let returns = scoped.simple_type_of(&body);
            Ok::<_, ParseError>((body, returns))
        })?;
        self.expect_close(open)?;

        debug!(function = %name, arity = params.len(), returns = %returns, "defun");
        state.define_function(Function::user(name, params, returns, body));
        Ok(Expression::None)
    }

    /// `(name type name type ...)`
    fn parse_params(
        &mut self,
        state: &InterpreterState,
        function: &str,
    ) -> Result<Vec<Param>, ParseError> {
        let open = self.expect(TokenTag::OpenParen)?;
        let mut params: Vec<Param> = Vec::new();
        loop {
            match self.peek_token() {
                None => return Err(self.unclosed(&open)),
                Some(token) if token.tag() == TokenTag::CloseParen => {
                    self.bump();
                    return Ok(params);
                }
                Some(_) => {}
            }
            let (name, name_at) = self.expect_identifier()?;
            let taken = name == function
                || params.iter().any(|param| param.name == name)
                || state.is_defined(&name);
            if taken {
                return Err(ParseError::already_defined(&name, self.location_of(name_at)));
            }
            let (type_name, type_at) = self.expect_identifier()?;
            let Some(ty) = ExprType::from_type_name(&type_name) else {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!("Unknown type '{type_name}'"),
                    self.location_of(type_at),
                ));
            };
            params.push(Param::new(name, ty));
        }
    }
}
