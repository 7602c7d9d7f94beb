use std::collections::HashMap;

use console::Style;

use crate::output::OutputMode;

/// Named styles used by the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text` as `name` for the given output mode. Unknown names
    /// leave the text plain.
    pub fn apply(&self, name: &str, text: &str, mode: OutputMode) -> String {
        if mode.is_debug() {
            return format!("[{}]{}[/{}]", name, text, name);
        }
        match self.styles.get(name) {
            Some(style) if mode.should_use_color() => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            _ => text.to_string(),
        }
    }

    /// The styles the built-in templates use.
    pub fn standard() -> Self {
        Self::new()
            .add("title", Style::new().bold())
            .add("muted", Style::new().dim())
            .add("group", Style::new().cyan())
            .add("name", Style::new().bold())
            .add("font", Style::new())
            .add("number", Style::new().yellow())
            .add("warning", Style::new().yellow().bold())
            .add("error", Style::new().red().bold())
            .add("success", Style::new().green())
            .add("selected", Style::new().magenta().bold())
    }
}
