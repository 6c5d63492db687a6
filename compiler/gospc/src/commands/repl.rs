//! The `repl` command: one evaluation per line against a persistent session.

use std::io::{self, BufRead, Write};

use gospc::{DriverError, Session};

pub fn run_repl() -> Result<(), DriverError> {
    let session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "gosp> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            ":quit" | ":q" => return Ok(()),
            ":functions" => {
                writeln!(stdout, "{}", session.function_names().join(" "))?;
                continue;
            }
            _ => {}
        }
        let evaluation = session.evaluate("repl", input);
        write!(stdout, "{}", evaluation.transcript)?;
    }
}
