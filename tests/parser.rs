use nixi::{
    ast::{BinaryOperator, Expr, GuiElement, Number, Statement, attribute},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Position, Token},
        parser::core::{MAX_NESTING, parse},
    },
    parse_source,
};

fn single_expression(source: &str) -> Expr {
    let mut program = parse_source(source).unwrap();
    assert_eq!(program.len(), 1, "expected exactly one statement in {source:?}");
    match program.remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    match parse_source(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

fn integer(expr: &Expr) -> i64 {
    match expr {
        Expr::Number { value: Number::Integer(n), .. } => *n,
        other => panic!("expected an integer literal, got {other:?}"),
    }
}

#[test]
fn empty_program() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("# nothing here\n").unwrap().is_empty());
}

#[test]
fn missing_eof_is_reported() {
    let tokens = vec![(Token::Integer(1), Position::new(1, 1))];
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn multiplication_binds_tighter() {
    let Expr::BinaryOp { left, op, right, .. } = single_expression("1 + 2 * 3") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(integer(&left), 1);
    assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let Expr::BinaryOp { left, op, right, .. } = single_expression("10 - 4 - 3") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert_eq!(integer(&right), 3);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn equality_binds_looser_than_arithmetic() {
    let Expr::BinaryOp { op, left, .. } = single_expression("1 + 1 == 2") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Equal);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
}

#[test]
fn pipe_binds_loosest() {
    let Expr::Pipe { left, right, .. } = single_expression("1 + 2 | f(3) | g") else {
        panic!("expected a pipe");
    };
    assert!(matches!(*right, Expr::Identifier { ref name, .. } if name == "g"));
    let Expr::Pipe { left: inner, right: call, .. } = *left else {
        panic!("pipes should associate to the left");
    };
    assert!(matches!(*inner, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
    assert!(matches!(*call, Expr::Call { ref name, ref arguments, .. }
                            if name == "f" && arguments.len() == 1));
}

#[test]
fn operator_nodes_record_the_operator_position() {
    let expr = single_expression("a + b");
    assert_eq!(expr.position(), Position::new(1, 3));

    let expr = single_expression("x | f");
    assert_eq!(expr.position(), Position::new(1, 3));
}

#[test]
fn parentheses_group() {
    let Expr::BinaryOp { op, left, .. } = single_expression("(1 + 2) * 3") else {
        panic!("expected a binary operation");
    };
    assert_eq!(op, BinaryOperator::Mul);
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
}

#[test]
fn literals() {
    assert!(matches!(single_expression("true"), Expr::Bool { value: true, .. }));
    assert!(matches!(single_expression("false"), Expr::Bool { value: false, .. }));
    assert!(matches!(single_expression("2.5"),
                     Expr::Number { value: Number::Real(r), .. } if r.0 == 2.5));
    assert!(matches!(single_expression("'hi'"), Expr::Str { ref value, .. } if value == "hi"));
}

#[test]
fn lists_allow_trailing_commas() {
    let Expr::List { elements, .. } = single_expression("[1, 2, 3,]") else {
        panic!("expected a list");
    };
    assert_eq!(elements.iter().map(integer).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(matches!(single_expression("[]"), Expr::List { ref elements, .. } if elements.is_empty()));
}

#[test]
fn attribute_sets_keep_source_order_and_last_value() {
    let Expr::AttrSet { attributes, .. } = single_expression("{ b = 1; a = 2; b = 3 }") else {
        panic!("expected an attribute set");
    };
    let names: Vec<_> = attributes.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(integer(attribute(&attributes, "b").unwrap()), 3);
}

#[test]
fn attribute_set_keys_may_be_keywords() {
    let Expr::AttrSet { attributes, .. } = single_expression("{ label = 1; window = 2; }") else {
        panic!("expected an attribute set");
    };
    assert!(attribute(&attributes, "label").is_some());
    assert!(attribute(&attributes, "window").is_some());
}

#[test]
fn attribute_access_chains() {
    let Expr::AttrAccess { object, attribute, pos } = single_expression("a.b.c") else {
        panic!("expected attribute access");
    };
    assert_eq!(attribute, "c");
    assert_eq!(pos, Position::new(1, 4));
    assert!(matches!(*object, Expr::AttrAccess { ref attribute, .. } if attribute == "b"));
}

#[test]
fn calls_take_the_callee_position() {
    let expr = single_expression("  greet(\"x\", 1)");
    assert!(matches!(expr, Expr::Call { ref name, ref arguments, pos }
                           if name == "greet" && arguments.len() == 2 && pos == Position::new(1, 3)));
}

#[test]
fn only_identifiers_can_be_called() {
    assert_eq!(parse_error("config.handler()"),
               ParseError::InvalidCallTarget { position: Position::new(1, 15) });
    assert!(matches!(parse_error("f()()"), ParseError::InvalidCallTarget { .. }));
}

#[test]
fn let_binding() {
    let program = parse_source("let answer = 42;").unwrap();
    assert!(matches!(&program[0], Statement::Let { name, value, pos }
                                  if name == "answer"
                                     && integer(value) == 42
                                     && *pos == Position::new(1, 1)));
}

#[test]
fn function_definition() {
    let program = parse_source("func add(a, b) { let c = a + b; return c; }").unwrap();
    let Statement::Function(def) = &program[0] else {
        panic!("expected a function definition");
    };
    assert_eq!(def.name, "add");
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(def.body.len(), 2);
    assert!(matches!(def.body[1], Statement::Return { .. }));
}

#[test]
fn statements_may_share_a_line_or_be_separated_by_semicolons() {
    assert_eq!(parse_source("let a = 1 let b = 2").unwrap().len(), 2);
    assert_eq!(parse_source("let a = 1; let b = 2;").unwrap().len(), 2);
    assert_eq!(parse_source("let a = 1\nlet b = 2\n").unwrap().len(), 2);
}

#[test]
fn gui_definition() {
    let source = r#"gui App {
                        window(title: "Demo", width: 400, height: 300) {
                            label(text: "Hello");
                            button(text: "Go", onClick: go)
                        }
                        textbox(id: "free")
                    }"#;
    let program = parse_source(source).unwrap();
    let Statement::Gui(def) = &program[0] else {
        panic!("expected a gui definition");
    };
    assert_eq!(def.name, "App");
    assert_eq!(def.elements.len(), 2);

    let GuiElement::Window(window) = &def.elements[0] else {
        panic!("expected a window first");
    };
    let keys: Vec<_> = window.attributes.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["title", "width", "height"]);
    let kinds: Vec<_> = window.children.iter().map(|w| w.kind.as_str()).collect();
    assert_eq!(kinds, vec!["label", "button"]);

    let GuiElement::Widget(widget) = &def.elements[1] else {
        panic!("expected a bare widget second");
    };
    assert_eq!(widget.kind, "textbox");
}

#[test]
fn gui_attribute_names_may_be_widget_keywords() {
    let program = parse_source(r#"gui App { button(label: "ok") }"#).unwrap();
    let Statement::Gui(def) = &program[0] else {
        panic!("expected a gui definition");
    };
    let GuiElement::Widget(widget) = &def.elements[0] else {
        panic!("expected a widget");
    };
    assert!(attribute(&widget.attributes, "label").is_some());
}

#[test]
fn windows_only_contain_widgets() {
    assert!(matches!(parse_error("gui App { window() { window() { } } }"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("gui App { let x = 1 }"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn unexpected_token_names_what_was_expected() {
    let err = parse_error("let = 1");
    assert_eq!(err.position(), Position::new(1, 5));
    assert_eq!(err.to_string(),
               "Error on line 1, column 5: Expected an identifier, found `=`.");
}

#[test]
fn unclosed_constructs_fail_at_end_of_input() {
    assert!(matches!(parse_error("func f() {"), ParseError::UnexpectedToken { ref found, .. }
                                                if found == "end of input"));
    assert!(parse_source("[1, 2").is_err());
    assert!(parse_source("(1 + 2").is_err());
}

#[test]
fn reserved_words_without_grammar_are_rejected() {
    assert!(parse_source("if x then 1 else 2").is_err());
    assert!(parse_source("import foo").is_err());
}

#[test]
fn parsing_is_deterministic() {
    let source = r#"
        let config = { name = "App"; sizes = [1, 2.5, true, 'x']; }
        func scale(value, factor) {
            let result = (value + 1) * factor / 2 - 3;
            return result;
        }
        config.name == "App"
        config.sizes | scale(2) | echo
        gui App {
            window(title: config.name, width: 400, height: 300) {
                label(text: "Hello");
                button(text: "Go", id: "go", onClick: scale)
            }
            textbox(id: input-box)
        }
    "#;

    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn deeply_nested_delimiters_are_rejected() {
    let source = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    let err = parse_error(&source);

    assert_eq!(err,
               ParseError::NestingTooDeep { position: Position::new(1, MAX_NESTING + 1) });
    assert!(matches!(parse_error(&"[".repeat(200_000)), ParseError::NestingTooDeep { .. }));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let source = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_eq!(integer(&single_expression(&source)), 1);

    let source = format!("{}{}", "[".repeat(MAX_NESTING), "]".repeat(MAX_NESTING));
    assert!(matches!(single_expression(&source), Expr::List { .. }));
}
