//! Resynchronization after a failed top-level expression.

use gosp_lexer_core::Position;

use crate::Parser;

impl Parser<'_> {
    /// Skip the expression at the cursor by tokens, balancing delimiters.
    ///
    /// The first token is always consumed. Skipping then continues until the
    /// delimiters opened so far are closed, or the next token starts on
    /// another line or in another buffer. Returns the position reached.
    pub fn skip_expression(&mut self) -> Position {
        let Some(first) = self.next_token() else {
            return self.position();
        };
        let line = first.position.line;
        let mut depth: usize = usize::from(first.tag().is_open_delim());
        while depth > 0 {
            let Some(token) = self.peek_token() else {
                break;
            };
            if token.position.line != line {
                break;
            }
            self.bump();
            if token.tag().is_open_delim() {
                depth += 1;
            } else if token.tag().is_close_delim() {
                depth -= 1;
            }
        }
        self.position()
    }
}
