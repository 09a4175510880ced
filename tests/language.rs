use std::{fs, io};

use nixi::{
    compile,
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{
            core::Context,
            host::{Host, ShellRunner},
        },
        value::core::Value,
    },
    parse_source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "nx"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        if let Err(e) = run(&code) {
            panic!("Demo {path:?} failed:\n{code}\nError: {e:?}");
        }
        if let Err(e) = compile(&code) {
            panic!("Demo {path:?} did not compile:\n{code}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn run(src: &str) -> Result<Value, Error> {
    let program = parse_source(src)?;
    let host = Host::new(Box::new(io::sink()), Box::new(ShellRunner));
    let mut context = Context::with_host(host);
    Ok(context.run(&program)?)
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("let x = 1 + 2\nassert(x == 3)");
    assert_success("let x = 7 * 9\nassert(x == 63)");
    assert_success("let x = 8 - 5\nassert(x == 3)");
    assert_success("let x = 10 / 4\nassert(x == 2.5)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(run("2 + 3 * 4").unwrap(), Value::Integer(14));
    assert_eq!(run("(2 + 3) * 4").unwrap(), Value::Integer(20));
    assert_eq!(run("10 - 4 - 3").unwrap(), Value::Integer(3));
    assert_eq!(run("8 / 2 / 2").unwrap(), Value::Real(2.0));
}

#[test]
fn division_always_yields_a_real() {
    assert_eq!(run("6 / 3").unwrap(), Value::Real(2.0));
    assert_eq!(run("7 / 2").unwrap(), Value::Real(3.5));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_eq!(run("1 + 0.5").unwrap(), Value::Real(1.5));
    assert_eq!(run("2 * 1.5").unwrap(), Value::Real(3.0));
    assert_success("assert(1 == 1.0)");
}

#[test]
fn integer_overflow_is_an_error() {
    assert!(matches!(runtime_error("9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("9223372036854775807 * 2"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1.5 / 0.0"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn strings_and_lists_concatenate_and_repeat() {
    assert_eq!(run(r#""ab" + "cd""#).unwrap(), Value::from("abcd"));
    assert_eq!(run(r#""ab" * 3"#).unwrap(), Value::from("ababab"));
    assert_eq!(run(r#"2 * "ab""#).unwrap(), Value::from("abab"));
    assert_eq!(run(r#""ab" * (0 - 1)"#).unwrap(), Value::from(""));
    assert_success("assert([1, 2] + [3] == [1, 2, 3])");
    assert_success("assert([0] * 3 == [0, 0, 0])");
}

#[test]
fn huge_repetitions_overflow() {
    assert!(matches!(runtime_error(r#""ab" * 9223372036854775807"#),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("[1, 2] * 9223372036854775807"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error(r#""x" * 16777217"#), RuntimeError::Overflow { .. }));
}

#[test]
fn repeating_nothing_is_immediate() {
    assert_eq!(run("[] * 9223372036854775807").unwrap(), Value::from(Vec::<Value>::new()));
    assert_eq!(run(r#""" * 9223372036854775807"#).unwrap(), Value::from(""));
    assert_eq!(run(r#""ab" * 0"#).unwrap(), Value::from(""));
}

#[test]
fn mismatched_operands_are_type_errors() {
    assert!(matches!(runtime_error(r#""a" + 1"#), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error(r#""a" - "b""#), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("[1] * [2]"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("true + 1"), RuntimeError::TypeError { .. }));
}

#[test]
fn equality_compares_any_values() {
    assert_eq!(run(r#""a" == 1"#).unwrap(), Value::Bool(false));
    assert_eq!(run("[1, 2] == [1, 2.0]").unwrap(), Value::Bool(true));
    assert_eq!(run("{ a = 1; } == { a = 1; }").unwrap(), Value::Bool(true));
    assert_eq!(run("true == false").unwrap(), Value::Bool(false));
}

#[test]
fn attribute_sets() {
    assert_success(r#"let config = { name = "app"; debug = true; }
                      assert(config.name == "app")
                      assert(config.debug)"#);
    assert_success("let nested = { inner = { value = 42; }; }\nassert(nested.inner.value == 42)");
}

#[test]
fn missing_attribute_is_absent() {
    assert_eq!(run("{ a = 1; }.b").unwrap(), Value::Absent);
}

#[test]
fn attribute_access_on_non_record_fails() {
    assert!(matches!(runtime_error("let x = 1\nx.field"), RuntimeError::TypeError { .. }));
}

#[test]
fn duplicate_attribute_keeps_last_value() {
    assert_eq!(run("{ a = 1; a = 2; }.a").unwrap(), Value::Integer(2));
}

#[test]
fn unknown_names_are_name_errors() {
    assert!(runtime_error("x + 1").is_name_error());
    assert!(runtime_error("missing(1)").is_name_error());
    assert!(runtime_error("1 | missing").is_name_error());
}

#[test]
fn functions_and_returns() {
    assert_success("func add(a, b) { return a + b; }\nassert(add(2, 3) == 5)");
    assert_success("func add(a, b) { a + b }\nassert(add(2, 3) == 5)");
    assert_success(r#"func early() { return "first"; return "second"; }
                      assert(early() == "first")"#);
    assert_eq!(run("func nothing() { }\nnothing()").unwrap(), Value::Absent);
}

#[test]
fn extra_arguments_are_ignored() {
    assert_success("func first(a) { return a; }\nassert(first(1, 2, 3) == 1)");
}

#[test]
fn missing_arguments_stay_unbound() {
    assert!(runtime_error("func second(a, b) { return b; }\nsecond(1)").is_name_error());
}

#[test]
fn closures_snapshot_their_defining_scope() {
    assert_success(r"let x = 1
                     func get_x() { return x; }
                     let x = 2
                     assert(get_x() == 1)");
    assert!(runtime_error("func early() { return later; }\nlet later = 1\nearly()").is_name_error());
}

#[test]
fn function_bodies_do_not_leak_bindings() {
    assert!(runtime_error("func f() { let inner = 1; inner }\nf()\ninner").is_name_error());
}

#[test]
fn functions_can_refer_to_themselves() {
    assert_success("func me() { return me; }\nassert(me() == me)");
}

#[test]
fn pipes_pass_the_left_value_first() {
    assert_success("func add_one(x) { return x + 1; }\nassert((5 | add_one()) == 6)");
    assert_success("func add_one(x) { return x + 1; }\nassert((5 | add_one) == 6)");
    assert_success(r#"func join(a, b) { a + b }
                      assert(("a" | join("b") | join("c")) == "abc")"#);
    assert_eq!(run("[1, 2, 3] | len").unwrap(), Value::Integer(3));
}

#[test]
fn pipe_into_a_non_call_returns_the_left_value() {
    assert_eq!(run("5 | 6").unwrap(), Value::Integer(5));
}

#[test]
fn calling_a_non_function_fails() {
    assert!(matches!(runtime_error("let x = 1\nx()"), RuntimeError::NotCallable { .. }));
}

#[test]
fn builtins_can_be_rebound() {
    assert_eq!(run("let len = 3\nlen").unwrap(), Value::Integer(3));
    assert_failure("let len = 3\nlen([1])");
}

#[test]
fn gui_definitions_evaluate_to_gui_values() {
    let value = run(r#"gui App { window(title: "x") { button(text: "ok"); } }"#).unwrap();
    assert_eq!(value.type_name(), "gui");
    assert_eq!(value.to_string(), "<gui App>");
}

#[test]
fn gui_attributes_are_not_evaluated() {
    assert_success("gui App { button(onClick: not_defined_yet); }");
}

#[test]
fn top_level_return_does_not_end_the_program() {
    assert_eq!(run("return 1\n2").unwrap(), Value::Integer(2));
}

#[test]
fn assert_fails_on_false() {
    assert!(matches!(runtime_error("assert(1 == 2)"), RuntimeError::AssertionFailed { .. }));
    assert_failure("assert(1)");
}

#[test]
fn errors_carry_positions() {
    let Error::Runtime(e) = run("let a = 1\nlet b = a + c").unwrap_err() else {
        panic!("expected a runtime error");
    };
    assert_eq!(e.position().line, 2);
    assert_eq!(e.position().column, 13);
}

#[test]
fn syntax_errors_are_reported_before_running() {
    assert!(matches!(run("let = 1"), Err(Error::Parse(_))));
    assert!(matches!(run("echo(\"unterminated)"), Err(Error::Lex(_))));
    assert!(matches!(run("let x = 1 @ 2"), Err(Error::Lex(_))));
}

#[test]
fn context_keeps_bindings_between_runs() {
    let host = Host::new(Box::new(io::sink()), Box::new(ShellRunner));
    let mut context = Context::with_host(host);

    context.run(&parse_source("let x = 20").unwrap()).unwrap();
    let value = context.run(&parse_source("x + 1").unwrap()).unwrap();

    assert_eq!(value, Value::Integer(21));
}

#[test]
fn integer_real_equality_is_exact() {
    assert_eq!(run("9007199254740993 == 9007199254740992.0").unwrap(), Value::Bool(false));
    assert_eq!(run("9007199254740992 == 9007199254740992.0").unwrap(), Value::Bool(true));
    assert_eq!(run("9223372036854775807 == 9223372036854775808.0").unwrap(), Value::Bool(false));
    assert_eq!(run("3 == 3.5").unwrap(), Value::Bool(false));
}

#[test]
fn runaway_recursion_is_a_runtime_error() {
    let err = runtime_error("func f(n) { return f(n + 1); }\nf(0)");
    assert!(matches!(err, RuntimeError::RecursionLimit { .. }));
    assert_eq!(err.to_string(),
               format!("Error on {}: Maximum recursion depth exceeded.", err.position()));
}

#[test]
fn context_recovers_after_hitting_the_recursion_limit() {
    let host = Host::new(Box::new(io::sink()), Box::new(ShellRunner));
    let mut context = Context::with_host(host);

    let runaway = parse_source("func f(n) { return f(n + 1); }\nf(0)").unwrap();
    assert!(matches!(context.run(&runaway), Err(RuntimeError::RecursionLimit { .. })));

    let nested = format!("{}1{}", "[".repeat(100), "]".repeat(100));
    let program = parse_source(&nested).unwrap();
    assert!(matches!(context.run(&program), Ok(Value::List(_))));
}
