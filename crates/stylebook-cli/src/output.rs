//! Output mode selection.

use clap::ValueEnum;

/// How command output is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout supports it, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// Style names shown as `[name]...[/name]` tags.
    TermDebug,
    /// The view data as JSON, no template.
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    pub fn is_debug(self) -> bool {
        self == OutputMode::TermDebug
    }

    pub fn is_structured(self) -> bool {
        self == OutputMode::Json
    }
}
