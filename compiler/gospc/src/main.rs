//! gosp command line.

mod commands;

use commands::{eval_expr, explain_error, lex_file, run_files, run_repl, GlobalOptions};
use gosp_diagnostic::emitter::ColorMode;
use gospc::{init_tracing, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = dispatch(&args) {
        if !matches!(error, DriverError::Reported { .. }) {
            eprintln!("error: {error}");
        }
        if matches!(error, DriverError::UnknownCommand(_) | DriverError::MissingArgument(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(error.exit_code());
    }
}

fn dispatch(args: &[String]) -> Result<(), DriverError> {
    let mut options = GlobalOptions::default();
    let mut rest = Vec::with_capacity(args.len());
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value).ok_or_else(|| DriverError::InvalidFlag {
                flag: "--color",
                value: value.to_owned(),
            })?;
        } else {
            rest.push(arg.as_str());
        }
    }

    let Some((&command, operands)) = rest.split_first() else {
        print_usage();
        return Ok(());
    };
    match command {
        "run" => {
            if operands.is_empty() {
                return Err(DriverError::MissingArgument("file to run"));
            }
            let paths: Vec<String> = operands.iter().map(|path| (*path).to_owned()).collect();
            run_files(&paths, options)
        }
        "eval" => {
            if operands.is_empty() {
                return Err(DriverError::MissingArgument("expression to evaluate"));
            }
            eval_expr(&operands.join(" "), options)
        }
        "lex" => {
            let path = operands
                .first()
                .ok_or(DriverError::MissingArgument("file to lex"))?;
            lex_file(path)
        }
        "repl" => run_repl(),
        "explain" | "--explain" => {
            let code = operands
                .first()
                .ok_or(DriverError::MissingArgument("error code"))?;
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("gosp {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            if std::path::Path::new(other)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gosp"))
            {
                let paths: Vec<String> = rest.iter().map(|path| (*path).to_owned()).collect();
                return run_files(&paths, options);
            }
            Err(DriverError::UnknownCommand(other.to_owned()))
        }
    }
}

fn print_usage() {
    println!("gosp: a small typed S-expression language");
    println!();
    println!("Usage: gosp [--color=auto|always|never] <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file>...        Evaluate files in order against one state");
    println!("  eval <expr>          Evaluate an expression given inline");
    println!("  lex <file>           Print the token stream of a file");
    println!("  repl                 Read-eval-print loop (:functions, :quit)");
    println!("  explain <code>       Describe an error code (e.g. E2001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  GOSP_LOG=<filter>    Enable logging (e.g. debug, gosp_parse=trace)");
    println!("  GOSP_LOG_TREE=1      Log as an indented span tree");
    println!();
    println!("Examples:");
    println!("  gosp eval '(+ 1 2 3)'");
    println!("  gosp run prelude.gosp main.gosp");
    println!("  gosp explain E2002");
}
