//! The `lex` command: dump the token stream of a file.

use gosp_lexer::Lexer;
use gospc::{DriverError, SourceMap};

use super::read_file;

pub fn lex_file(path: &str) -> Result<(), DriverError> {
    let content = read_file(path)?;
    let sources = SourceMap::single(path, &content);
    let tokens = Lexer::new(&sources).tokenize();

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!(
            "  {}:{}  {:?}",
            token.position.line, token.position.column, token.kind
        );
    }
    Ok(())
}
