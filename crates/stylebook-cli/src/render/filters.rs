//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::theme::Theme;
use crate::output::OutputMode;
use crate::util::{pad_right, truncate_to_width};

/// Registers the template filters on `env`.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), mode)
    });

    env.add_filter("truncate_at", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });

    env.add_filter("col", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });
}
