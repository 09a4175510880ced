use crate::{
    ast::{Expr, GuiDef, GuiElement, WidgetElement, WindowElement, attribute},
    codegen::{
        core::Compiler,
        expr::{compile_expression, is_python_identifier, python_name, string_literal},
    },
    widget::toolkit_class,
};

impl Compiler {
    /// Emits a `QMainWindow` subclass for a GUI definition.
    ///
    /// Window attributes are applied first, in source order. When the
    /// definition has any element, one central widget with a vertical layout
    /// follows, then every widget in source order, whether it sits in a window
    /// or directly in the definition.
    pub(in crate::codegen) fn compile_gui(&mut self, def: &GuiDef) {
        self.emit(&format!("class {}(QMainWindow):", python_name(&def.name)));
        self.indent();
        self.emit("def __init__(self):");
        self.indent();
        self.emit("super().__init__()");

        for element in &def.elements {
            if let GuiElement::Window(window) = element {
                self.compile_window_attributes(window);
            }
        }

        if !def.elements.is_empty() {
            self.blank();
            self.emit("central_widget = QWidget()");
            self.emit("self.setCentralWidget(central_widget)");
            self.emit("layout = QVBoxLayout()");
            self.emit("central_widget.setLayout(layout)");
            self.blank();
        }

        for element in &def.elements {
            match element {
                GuiElement::Window(window) => {
                    for widget in &window.children {
                        self.compile_widget(widget);
                    }
                },
                GuiElement::Widget(widget) => self.compile_widget(widget),
            }
        }

        self.dedent();
        self.dedent();
        self.blank();
    }

    fn compile_window_attributes(&mut self, window: &WindowElement) {
        if let Some(title) = attribute(&window.attributes, "title") {
            self.emit(&format!("self.setWindowTitle({})", compile_expression(title)));
        }

        if let (Some(width), Some(height)) = (attribute(&window.attributes, "width"),
                                              attribute(&window.attributes, "height"))
        {
            self.emit(&format!("self.setGeometry(100, 100, {}, {})",
                               compile_expression(width),
                               compile_expression(height)));
        }
    }

    /// Emits the statements building one widget.
    ///
    /// `text` takes precedence over `label` as the constructor argument. The
    /// `id` binding and `onClick` connection follow in attribute order, and
    /// the widget is added to the layout last.
    fn compile_widget(&mut self, widget: &WidgetElement) {
        let var = self.next_widget_var();
        let class = toolkit_class(&widget.kind);
        let text = attribute(&widget.attributes, "text")
                   .or_else(|| attribute(&widget.attributes, "label"))
                   .map_or_else(|| "\"\"".to_string(), compile_expression);
        self.emit(&format!("{var} = {class}({text})"));

        for (name, value) in &widget.attributes {
            match name.as_str() {
                "id" => self.emit(&id_binding(value, &var)),
                "onClick" => {
                    self.emit(&format!("{var}.clicked.connect({})", compile_expression(value)));
                },
                _ => {},
            }
        }

        self.emit(&format!("layout.addWidget({var})"));
        self.blank();
    }
}

/// Renders the statement that stores a widget on the window under its id.
fn id_binding(id: &Expr, var: &str) -> String {
    match id {
        Expr::Str { value, .. } if is_python_identifier(value) => format!("self.{value} = {var}"),
        Expr::Str { value, .. } => format!("setattr(self, {}, {var})", string_literal(value)),
        Expr::Identifier { name, .. } => format!("self.{} = {var}", python_name(name)),
        other => format!("setattr(self, {}, {var})", compile_expression(other)),
    }
}
