// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end programs through the public driver API.

use gospc::{evaluate_source, evaluate_sources, new_state, SourceMap};
use pretty_assertions::assert_eq;

fn results(text: &str) -> Vec<String> {
    let mut state = new_state();
    let (transcript, error) = evaluate_source(&mut state, "prog", text);
    assert_eq!(error, None, "{transcript}");
    transcript
        .lines()
        .filter_map(|line| line.strip_prefix("Result: "))
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_program_with_functions_and_lists() {
    let program = r#"
        (defun sq (x double) (* x x))
        (defun sum-sq (xs list) (map sq xs))
        (sum-sq [1 2 3])
        (let base 10 (/ (- base 4) 2))
        (let greeting "hi" greeting)
    "#;
    assert_eq!(
        results(program),
        vec![
            "undefined",
            "undefined",
            "[1.000000 4.000000 9.000000]",
            "3.000000",
            "hi",
        ]
    );
}

#[test]
fn test_int_arguments_widen_to_double() {
    assert_eq!(
        results("(defun half (x double) (/ x 2)) (half 5) (+ (half 1) 1.5)"),
        vec!["undefined", "2.500000", "2.000000"]
    );
}

#[test]
fn test_string_escapes_render_decoded() {
    assert_eq!(results(r#""a\"b\\c""#), vec![r#"a"b\c"#]);
}

#[test]
fn test_files_as_buffers() {
    let mut sources = SourceMap::new();
    sources.add_named("prelude.gosp", "(defun double-it (x double) (* 2 x))\n");
    sources.add_named("main.gosp", "(double-it 21)\n(double-it \"x\")\n");
    let mut state = new_state();
    let report = evaluate_sources(&mut state, &sources);
    assert_eq!(
        report.transcript,
        concat!(
            "`(defun double-it (x double) (* 2 x))` ->\n",
            "Result: undefined\n",
            "`(double-it 21)` ->\n",
            "Result: 42.000000\n",
            "(double-it \"x\")\n",
            "           ^~~~\n",
            "main.gosp:2:12: double-it: Expected double, got str\n",
        )
    );
    assert_eq!(report.first_error().unwrap().source, "main.gosp");
}
