//! Parameterized behavior tests covering the worked examples and error
//! scenarios.

use cellforth::config::Config;
use cellforth::runtime::built_ins::register_built_ins;
use cellforth::runtime::error::InterpError;
use cellforth::runtime::interpreter::Interpreter;
use test_case::test_case;

fn run(lines: &[&str]) -> (Interpreter, String, Option<InterpError>) {
    let mut interp = Interpreter::new(Config::default());
    register_built_ins(&mut interp).unwrap();

    let mut out = Vec::new();
    let mut last_err = None;

    for line in lines {
        if let Err(err) = interp.eval_line(line, &mut out) {
            last_err = Some(err);
        }
    }

    (interp, String::from_utf8(out).unwrap(), last_err)
}

#[test_case(&["1 2 +"], "")]
#[test_case(&["1 2 + ."], "3 ")]
#[test_case(&["10 4 - ."], "6 ")]
#[test_case(&["6 7 * ."], "42 ")]
#[test_case(&["12 3 / ."], "4 ")]
#[test_case(&["13 5 mod ."], "3 ")]
fn arithmetic_words(lines: &[&str], expected: &str) {
    let (_, out, err) = run(lines);
    assert!(err.is_none());
    assert_eq!(out, expected);
}

#[test_case(&["3 dup + ."], "6 ")]
#[test_case(&["1 2 swap . ."], "1 2 ")]
#[test_case(&["1 2 over . . ."], "1 2 1 ")]
#[test_case(&["1 2 3 rot . . ."], "1 3 2 ")]
#[test_case(&["1 2 nip ."], "2 ")]
#[test_case(&["1 2 tuck . . ."], "1 2 2 ")]
fn stack_words(lines: &[&str], expected: &str) {
    let (_, out, err) = run(lines);
    assert!(err.is_none());
    assert_eq!(out, expected);
}

#[test]
fn loop_correctness() {
    let (_, out, err) = run(&[": T  10 0 do i . loop ;", "T"]);
    assert!(err.is_none());
    assert_eq!(out, "0 1 2 3 4 5 6 7 8 9 ");
}

#[test]
fn nested_loops() {
    let (_, out, err) = run(&[": T  3 0 do 2 0 do j i + . loop loop ;", "T"]);
    assert!(err.is_none());
    assert_eq!(out, "0 1 1 2 2 3 ");
}

#[test_case("-7", "-1 ")]
#[test_case("0", "1 ")]
#[test_case("42", "1 ")]
fn conditional(input: &str, expected: &str) {
    let (_, out, err) = run(&[": T  dup 0 < if -1 else 1 then ;", &format!("{input} T .")]);
    assert!(err.is_none());
    assert_eq!(out, expected);
}

#[test]
fn indefinite_loop_empties_the_stack() {
    let (interp, _, err) = run(&[": T  begin 1 - dup 0 = until drop ;", "5 T"]);
    assert!(err.is_none());
    assert_eq!(interp.data_stack.len(), 0);
}

#[test]
fn variables_store_and_fetch() {
    let (_, out, err) = run(&["variable x", "42 x !", "x @ ."]);
    assert!(err.is_none());
    assert_eq!(out, "42 ");
}

#[test]
fn constants_push_their_value() {
    let (_, out, err) = run(&["100 constant c", "c c + ."]);
    assert!(err.is_none());
    assert_eq!(out, "200 ");
}

#[test]
fn duplicate_name_rejection_keeps_the_first_definition() {
    let (mut interp, _, err) = run(&[": foo 1 ;", ": foo 2 ;"]);
    assert_eq!(err, Some(InterpError::DuplicateWord("foo".to_string())));

    let mut out = Vec::new();
    interp.eval_line("foo", &mut out).unwrap();
    assert_eq!(interp.pop().unwrap(), 1);
}

#[test]
fn underflow_recovers_to_a_usable_idle_state() {
    let (mut interp, _, err) = run(&["+"]);
    assert_eq!(err, Some(InterpError::StackUnderflow));
    assert_eq!(interp.data_stack.len(), 0);

    let mut out = Vec::new();
    interp.eval_line("1 2 + .", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3 ");
}

#[test]
fn dot_quote_prints_immediately_in_interpret_mode() {
    let (_, out, err) = run(&[r#"." hello""#]);
    assert!(err.is_none());
    assert_eq!(out, "hello");
}

#[test]
fn dot_quote_prints_at_runtime_when_compiled() {
    let (_, out, err) = run(&[r#": greet  ." hi there" ;"#, "greet", "greet"]);
    assert!(err.is_none());
    assert_eq!(out, "hi therehi there");
}

#[test]
fn create_does_not_advance_the_free_cursor() {
    let (interp, _, err) = run(&["create spot"]);
    assert!(err.is_none());
    assert_eq!(interp.memory.here(), 0);
}

#[test]
fn unmatched_control_words_report_structured_errors() {
    let (_, _, err) = run(&[": T  then ;"]);
    assert_eq!(err, Some(InterpError::UnmatchedControlWord("then")));
}

#[test]
fn control_words_outside_compilation_are_rejected() {
    let (_, _, err) = run(&["if"]);
    assert_eq!(err, Some(InterpError::ImmediateOnly("if")));
}

#[test]
fn semicolon_without_colon_is_compile_only() {
    let (_, _, err) = run(&[";"]);
    assert_eq!(err, Some(InterpError::CompileOnly(";")));
}

#[test]
fn division_by_zero_is_recoverable() {
    let (mut interp, _, err) = run(&["1 0 /"]);
    assert_eq!(err, Some(InterpError::DivisionByZero));

    let mut out = Vec::new();
    interp.eval_line("6 2 / .", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3 ");
}

#[test]
fn stack_display_prints_bottom_to_top() {
    let (_, out, err) = run(&["1 2 3 .s"]);
    assert!(err.is_none());
    assert_eq!(out, "< 1 2 3 > ");
}

#[test]
fn self_recursive_words_are_syntactically_permitted() {
    // `spec.md` §4.8: self-recursion is allowed; depth is bounded only by
    // the host's call stack. A word that recurses a bounded number of times
    // must run without overflowing.
    let (_, out, err) = run(&[
        ": countdown  dup . dup 0 > if 1 - countdown else drop then ;",
        "3 countdown",
    ]);
    assert!(err.is_none());
    assert_eq!(out, "3 2 1 0 ");
}
