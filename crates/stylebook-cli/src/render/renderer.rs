//! Pre-compiled template renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use super::templates;
use super::theme::Theme;
use crate::output::OutputMode;

/// Renders command views, either through a template or as JSON.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a renderer with the built-in templates registered.
    pub fn new(theme: Theme, mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, theme, mode);
        for &(name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env, mode })
    }

    /// Registers an extra template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Renders `data` with template `name`, or as pretty JSON in JSON mode.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        if self.mode.is_structured() {
            return serde_json::to_string_pretty(data).map_err(|e| {
                Error::new(minijinja::ErrorKind::BadSerialization, e.to_string())
            });
        }
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}
