use microhelp::{
    ast::{ExprKind, Literal},
    diagnostics::{Diagnostic, DiagnosticKind, MicrohelpError, SourceSpan},
    parser::parse_line,
    runtime::Runtime,
    value::ValueKind,
};

fn eval(line: &str) -> String {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    runtime
        .eval_line(line, &mut out)
        .expect("evaluation should succeed");
    String::from_utf8(out).expect("output is utf-8")
}

fn eval_error(line: &str) -> (DiagnosticKind, String) {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    match runtime.eval_line(line, &mut out) {
        Ok(()) => panic!("expected `{line}` to fail"),
        Err(MicrohelpError::Diagnostic(diag)) => (diag.kind, diag.message),
        Err(other) => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn parses_attribute_chain_and_call() {
    let line = parse_line("help(microbit.display.scroll)").expect("parses");
    let expr = line.expr.expect("has an expression");
    let ExprKind::Call { callee, args } = expr.kind else {
        panic!("expected a call");
    };
    assert!(matches!(callee.kind, ExprKind::Name(ref name) if name == "help"));
    assert_eq!(args.len(), 1);
    assert!(matches!(args[0].kind, ExprKind::Attribute { ref name, .. } if name == "scroll"));
}

#[test]
fn parses_literals() {
    let cases = [
        ("None", Literal::None),
        ("True", Literal::Bool(true)),
        ("1_000", Literal::Int(1000)),
        ("'hi'", Literal::Str("hi".into())),
        ("\"a\\nb\"", Literal::Str("a\nb".into())),
    ];
    for (source, expected) in cases {
        let expr = parse_line(source).expect("parses").expr.expect("expression");
        match expr.kind {
            ExprKind::Literal(literal) => assert_eq!(literal, expected, "source {source}"),
            other => panic!("expected literal for {source}, found {other:?}"),
        }
    }
}

#[test]
fn blank_and_comment_lines_are_empty() {
    assert!(parse_line("   ").expect("parses").expr.is_none());
    assert!(parse_line("# just a note").expect("parses").expr.is_none());
    assert_eq!(eval(""), "");
}

#[test]
fn help_without_arguments_prints_welcome() {
    assert_eq!(eval("help()"), "Welcome to MicroPython on the BBC micro:bit!\n");
}

#[test]
fn help_with_two_arguments_is_rejected() {
    let (kind, message) = eval_error("help(1, 2)");
    assert_eq!(kind, DiagnosticKind::Runtime);
    assert_eq!(
        message,
        "function `help` expected at most 1 arguments but received 2"
    );
}

#[test]
fn echoes_values_that_are_not_none() {
    assert_eq!(eval("microbit.display"), "<MicroBitDisplay object>\n");
    assert_eq!(eval("'abc'.upper()"), "'ABC'\n");
    assert_eq!(eval("microbit.Image"), "<class 'MicroBitImage'>\n");
    assert_eq!(
        eval("microbit.display.scroll"),
        "<bound_method <function scroll> of <MicroBitDisplay object>>\n"
    );
    assert_eq!(eval("None"), "");
}

#[test]
fn attribute_access_makes_fresh_bound_methods() {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    let first = runtime
        .eval_expr("microbit.pin0.read_digital", &mut out)
        .expect("evaluates");
    let second = runtime
        .eval_expr("microbit.pin0.read_digital", &mut out)
        .expect("evaluates");
    assert!(matches!(first.kind(), ValueKind::BoundMethod(_)));
    assert!(!first.is(&second));
}

#[test]
fn running_time_is_available_without_hardware() {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    let value = runtime
        .eval_expr("microbit.running_time()", &mut out)
        .expect("evaluates");
    assert!(matches!(value.kind(), ValueKind::Int(ms) if *ms >= 0));
}

#[test]
fn hardware_calls_report_missing_board() {
    let (kind, message) = eval_error("microbit.display.scroll('Hello')");
    assert_eq!(kind, DiagnosticKind::Runtime);
    assert!(message.contains("hardware is not available"));
}

#[test]
fn method_arity_leaves_out_the_receiver() {
    assert_eq!(
        eval_error("microbit.display.clear(1)").1,
        "function `clear` expected 0 arguments but received 1"
    );
    assert_eq!(
        eval_error("microbit.display.scroll()").1,
        "function `scroll` expected between 1 and 2 arguments but received 0"
    );
}

#[test]
fn unbound_method_arity_counts_every_argument() {
    assert_eq!(
        eval_error("microbit.Image.width()").1,
        "function `width` expected 1 arguments but received 0"
    );
    assert_eq!(
        eval_error("microbit.sleep()").1,
        "function `sleep` expected 1 arguments but received 0"
    );
}

#[test]
fn random_stays_below_its_bound() {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    for _ in 0..50 {
        let value = runtime
            .eval_expr("microbit.random(10)", &mut out)
            .expect("evaluates");
        assert!(matches!(value.kind(), ValueKind::Int(n) if (0..10).contains(n)));
    }
    let value = runtime
        .eval_expr("microbit.random(1)", &mut out)
        .expect("evaluates");
    assert!(matches!(value.kind(), ValueKind::Int(0)));
}

#[test]
fn random_rejects_empty_ranges() {
    let (kind, message) = eval_error("microbit.random(0)");
    assert_eq!(kind, DiagnosticKind::Runtime);
    assert_eq!(message, "random bound must be positive");
    assert!(eval_error("microbit.random('ten')").1.contains("expected int"));
}

#[test]
fn unknown_names_and_attributes_fail() {
    assert_eq!(
        eval_error("nothing").1,
        "name 'nothing' isn't defined"
    );
    assert_eq!(
        eval_error("microbit.nothing").1,
        "'module' object has no attribute 'nothing'"
    );
    assert_eq!(eval_error("(1)()").1, "'int' object isn't callable");
}

#[test]
fn syntax_errors_are_reported() {
    assert_eq!(eval_error("'open").0, DiagnosticKind::Lexer);
    assert_eq!(eval_error("help(").0, DiagnosticKind::Parser);
    assert_eq!(eval_error("help() extra").0, DiagnosticKind::Parser);
    assert_eq!(eval_error("microbit.").0, DiagnosticKind::Parser);
    assert_eq!(eval_error("1 + 2").0, DiagnosticKind::Parser);
}

#[test]
fn diagnostics_render_span_and_notes() {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    let err = runtime
        .eval_line("microbit.reset()", &mut out)
        .expect_err("reset needs a board");
    assert_eq!(
        err.to_string(),
        "Runtime: micro:bit hardware is not available on this host (0..16)\n  \
         note: only `random`, `sleep` and `running_time` run without a board\n"
    );

    let plain = Diagnostic::runtime("stop").with_span(SourceSpan::new(2, 4));
    assert_eq!(plain.to_string(), "Runtime: stop (2..4)");
}
