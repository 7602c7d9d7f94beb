//! Template rendering with named styles.

mod filters;
mod renderer;
mod templates;
mod theme;

pub use renderer::Renderer;
pub use theme::Theme;
