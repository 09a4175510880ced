/// Describes one widget keyword of the GUI sub-language.
///
/// The keyword doubles as the widget's kind tag in the syntax tree. The
/// tokenizer consults this table to recognize widget keywords, and the code
/// generator consults it to pick the toolkit class that builds the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetSpec {
    /// Keyword introducing the widget, also used as its kind tag.
    pub keyword: &'static str,
    /// PyQt5 class constructed for this widget.
    pub class:   &'static str,
}

/// Defines the `WIDGETS` registry from `keyword => class` pairs.
macro_rules! widgets {
    (
        $(
            $keyword:literal => $class:literal
        ),* $(,)?
    ) => {
        /// Every widget known to the tokenizer and the code generator.
        pub static WIDGETS: &[WidgetSpec] = &[
            $(
                WidgetSpec { keyword: $keyword, class: $class },
            )*
        ];
    };
}

widgets! {
    "button"  => "QPushButton",
    "label"   => "QLabel",
    "textbox" => "QLineEdit",
}

/// Toolkit class used for a widget kind that has no registry entry.
pub const FALLBACK_CLASS: &str = "QWidget";

/// Finds the registry entry for a widget keyword.
///
/// # Example
/// ```
/// use nixi::widget::lookup;
///
/// assert_eq!(lookup("button").map(|w| w.class), Some("QPushButton"));
/// assert!(lookup("slider").is_none());
/// ```
#[must_use]
pub fn lookup(keyword: &str) -> Option<&'static WidgetSpec> {
    WIDGETS.iter().find(|spec| spec.keyword == keyword)
}

/// Returns the toolkit class for a widget kind tag, falling back to
/// [`FALLBACK_CLASS`] for unknown kinds.
#[must_use]
pub fn toolkit_class(kind: &str) -> &'static str {
    lookup(kind).map_or(FALLBACK_CLASS, |spec| spec.class)
}
