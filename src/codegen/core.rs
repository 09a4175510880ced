use std::collections::BTreeSet;

use crate::{
    ast::{GuiDef, Statement},
    codegen::expr::{compile_expression, python_name},
    widget::{FALLBACK_CLASS, WIDGETS},
};

const INDENT: &str = "    ";

/// Toolkit classes every generated GUI module uses besides the widgets.
const BASE_CLASSES: &[&str] = &["QApplication", "QMainWindow", "QVBoxLayout", FALLBACK_CLASS];

/// Translates a program into Python source driving PyQt5.
///
/// The translation is pure: every call starts from a fresh state, widget
/// variables are numbered from `widget_0` in emission order, and the same
/// program always yields the same text. An empty program yields an empty
/// string; otherwise the text ends with a newline.
///
/// # Example
/// ```
/// use nixi::{codegen::generate, parse_source};
///
/// let program = parse_source("let total = 1 + 2").unwrap();
///
/// assert_eq!(generate(&program), "total = (1 + 2)\n");
/// ```
#[must_use]
pub fn generate(program: &[Statement]) -> String {
    let mut compiler = Compiler::new();
    compiler.compile_program(program);
    compiler.finish()
}

/// Accumulates generated lines.
pub(in crate::codegen) struct Compiler {
    lines:          Vec<String>,
    indent:         usize,
    widget_counter: usize,
}

impl Compiler {
    const fn new() -> Self {
        Self { lines:          Vec::new(),
               indent:         0,
               widget_counter: 0, }
    }

    /// Appends one line at the current indentation.
    pub(in crate::codegen) fn emit(&mut self, code: &str) {
        self.lines.push(format!("{}{code}", INDENT.repeat(self.indent)));
    }

    /// Appends an empty line unless the previous line is already empty.
    pub(in crate::codegen) fn blank(&mut self) {
        if self.lines.last().is_none_or(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    pub(in crate::codegen) const fn indent(&mut self) {
        self.indent += 1;
    }

    pub(in crate::codegen) const fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Returns the next unused widget variable name.
    pub(in crate::codegen) fn next_widget_var(&mut self) -> String {
        let name = format!("widget_{}", self.widget_counter);
        self.widget_counter += 1;
        name
    }

    fn compile_program(&mut self, program: &[Statement]) {
        let first_gui = program.iter().find_map(|statement| match statement {
                                          Statement::Gui(def) => Some(def),
                                          _ => None,
                                      });

        if first_gui.is_some() {
            self.emit_preamble();
        }

        for statement in program {
            self.compile_statement(statement);
        }

        if let Some(def) = first_gui {
            self.emit_epilogue(def);
        }
    }

    fn compile_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Let { name, value, .. } => {
                let line = format!("{} = {}", python_name(name), compile_expression(value));
                self.emit(&line);
            },
            Statement::Function(def) => {
                let params = def.params
                                .iter()
                                .map(|param| python_name(param))
                                .collect::<Vec<_>>()
                                .join(", ");
                self.emit(&format!("def {}({params}):", python_name(&def.name)));

                self.indent();
                if def.body.is_empty() {
                    self.emit("pass");
                }
                for statement in &def.body {
                    self.compile_statement(statement);
                }
                self.dedent();
                self.blank();
            },
            Statement::Return { value, .. } => {
                self.emit(&format!("return {}", compile_expression(value)));
            },
            Statement::Gui(def) => self.compile_gui(def),
            Statement::Expression { expr, .. } => self.emit(&compile_expression(expr)),
        }
    }

    fn emit_preamble(&mut self) {
        let classes = BASE_CLASSES.iter()
                                  .copied()
                                  .chain(WIDGETS.iter().map(|spec| spec.class))
                                  .collect::<BTreeSet<_>>()
                                  .into_iter()
                                  .collect::<Vec<_>>()
                                  .join(", ");

        self.emit("#!/usr/bin/env python3");
        self.emit("import sys");
        self.emit(&format!("from PyQt5.QtWidgets import ({classes})"));
        self.blank();
    }

    fn emit_epilogue(&mut self, def: &GuiDef) {
        self.blank();
        self.emit("if __name__ == '__main__':");
        self.indent();
        self.emit("app = QApplication(sys.argv)");
        self.emit(&format!("window = {}()", python_name(&def.name)));
        self.emit("window.show()");
        self.emit("sys.exit(app.exec_())");
        self.dedent();
    }

    fn finish(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
