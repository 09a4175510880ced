use insta::assert_snapshot;
use nixi::{
    ast::{Expr, GuiDef, GuiElement, Statement, WidgetElement},
    codegen::generate,
    compile,
    interpreter::lexer::Position,
};

const DEMO: &str = r#"
func handle_click() { echo("clicked"); }

gui Demo {
    window(title: "Demo", width: 300, height: 200) {
        label(text: "Hello");
        button(text: "Go", id: "go", onClick: handle_click);
    }
    textbox(id: "input-box");
}
"#;

fn line_of(output: &str, needle: &str) -> usize {
    output.lines()
          .position(|line| line.contains(needle))
          .unwrap_or_else(|| panic!("{needle:?} not found in:\n{output}"))
}

#[test]
fn gui_program() {
    assert_snapshot!(compile(DEMO).unwrap(), @r#"
#!/usr/bin/env python3
import sys
from PyQt5.QtWidgets import (QApplication, QLabel, QLineEdit, QMainWindow, QPushButton, QVBoxLayout, QWidget)

def handle_click():
    echo("clicked")

class Demo(QMainWindow):
    def __init__(self):
        super().__init__()
        self.setWindowTitle("Demo")
        self.setGeometry(100, 100, 300, 200)

        central_widget = QWidget()
        self.setCentralWidget(central_widget)
        layout = QVBoxLayout()
        central_widget.setLayout(layout)

        widget_0 = QLabel("Hello")
        layout.addWidget(widget_0)

        widget_1 = QPushButton("Go")
        self.go = widget_1
        widget_1.clicked.connect(handle_click)
        layout.addWidget(widget_1)

        widget_2 = QLineEdit("")
        setattr(self, "input-box", widget_2)
        layout.addWidget(widget_2)

if __name__ == '__main__':
    app = QApplication(sys.argv)
    window = Demo()
    window.show()
    sys.exit(app.exec_())
"#);
}

#[test]
fn empty_program_generates_nothing() {
    assert_eq!(compile("").unwrap(), "");
    assert_eq!(generate(&[]), "");
}

#[test]
fn plain_programs_have_no_preamble() {
    let output = compile("let x = 1\nfunc f(a) { return a * 2; }\nf(x)").unwrap();
    assert_eq!(output, "x = 1\ndef f(a):\n    return (a * 2)\n\nf(x)\n");
}

#[test]
fn empty_function_bodies_pass() {
    assert_eq!(compile("func noop() { }").unwrap(), "def noop():\n    pass\n\n");
}

#[test]
fn generation_is_idempotent() {
    let program = nixi::parse_source(DEMO).unwrap();
    assert_eq!(generate(&program), generate(&program));
}

#[test]
fn button_statements_follow_attribute_order() {
    let output = compile(r#"gui App { window() { button(text: "b", id: "b", onClick: handler) } }"#).unwrap();

    let construction = line_of(&output, "widget_0 = QPushButton(\"b\")");
    let binding = line_of(&output, "self.b = widget_0");
    let connection = line_of(&output, "widget_0.clicked.connect(handler)");
    let added = line_of(&output, "layout.addWidget(widget_0)");

    assert!(construction < binding);
    assert!(binding < connection);
    assert!(connection < added);
}

#[test]
fn label_attribute_is_the_fallback_text() {
    let output = compile(r#"gui App { button(label: "Press") }"#).unwrap();
    assert!(output.contains("widget_0 = QPushButton(\"Press\")"));

    let output = compile(r#"gui App { button(label: "no", text: "yes") }"#).unwrap();
    assert!(output.contains("widget_0 = QPushButton(\"yes\")"));
}

#[test]
fn window_without_both_dimensions_has_no_geometry() {
    let output = compile(r#"gui App { window(width: 10) { } }"#).unwrap();
    assert!(!output.contains("setGeometry"));
    assert!(!output.contains("setWindowTitle"));
}

#[test]
fn empty_gui_has_no_layout() {
    let output = compile("gui Empty { }").unwrap();
    assert!(output.contains("class Empty(QMainWindow):"));
    assert!(!output.contains("central_widget"));
    assert!(output.contains("window = Empty()"));
}

#[test]
fn first_gui_is_started() {
    let output = compile("gui One { }\ngui Two { }").unwrap();
    assert!(output.contains("class One(QMainWindow):"));
    assert!(output.contains("class Two(QMainWindow):"));
    assert!(output.contains("window = One()"));
    assert_eq!(output.matches("if __name__").count(), 1);
}

#[test]
fn widget_numbering_spans_gui_definitions() {
    let output = compile("gui One { label(text: \"a\") }\ngui Two { label(text: \"b\") }").unwrap();
    assert!(output.contains("widget_0 = QLabel(\"a\")"));
    assert!(output.contains("widget_1 = QLabel(\"b\")"));
}

#[test]
fn identifier_ids_bind_by_name() {
    let output = compile("gui App { textbox(id: name-box) }").unwrap();
    assert!(output.contains("self.name_box = widget_0"));
}

#[test]
fn unknown_widget_kinds_fall_back_to_qwidget() {
    let widget = WidgetElement { kind:       "slider".to_string(),
                                 attributes: Vec::new(),
                                 pos:        Position::default(), };
    let program = vec![Statement::Gui(GuiDef { name:     "App".to_string(),
                                               elements: vec![GuiElement::Widget(widget)],
                                               pos:      Position::default(), })];

    assert!(generate(&program).contains("widget_0 = QWidget(\"\")"));
}

#[test]
fn expressions() {
    let output = compile(r#"let a = { name = "x"; items = [1, 2.5, true]; }.name
                            let b = "q\"uote" + 'line
break'
                            let c = 5 | add(1) | done
                            let d = 1 == 1.0"#).unwrap();
    assert_eq!(output,
               concat!("a = {\"name\": \"x\", \"items\": [1, 2.5, True]}['name']\n",
                       "b = (\"q\\\"uote\" + \"line\\nbreak\")\n",
                       "c = done(add(5, 1))\n",
                       "d = (1 == 1.0)\n"));
}

#[test]
fn pipe_into_a_non_call_keeps_the_left_side() {
    assert_eq!(compile("1 | 2").unwrap(), "1\n");
}

#[test]
fn delimiters_are_balanced() {
    let output = compile(DEMO).unwrap();
    let mut depth = [0_i32; 3];
    let mut quote = None;
    let mut escaped = false;

    for c in output.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth[0] += 1,
            ')' => depth[0] -= 1,
            '[' => depth[1] += 1,
            ']' => depth[1] -= 1,
            '{' => depth[2] += 1,
            '}' => depth[2] -= 1,
            _ => {},
        }
        assert!(depth.iter().all(|d| *d >= 0), "closing delimiter without opener:\n{output}");
    }

    assert_eq!(depth, [0, 0, 0]);
    assert_eq!(quote, None);
}

#[test]
fn expression_statements_compile_alone() {
    let Statement::Expression { expr, .. } = &nixi::parse_source("[]").unwrap()[0] else {
        panic!("expected an expression");
    };
    assert!(matches!(expr, Expr::List { .. }));
    assert_eq!(compile("[]").unwrap(), "[]\n");
}
