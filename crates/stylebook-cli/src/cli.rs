//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stylebook::{BulkEdit, SearchQuery};

use crate::output::OutputMode;

#[derive(Debug, Parser)]
#[command(
    name = "stylebook",
    version,
    about = "Audit and bulk-edit the text styles of a design document"
)]
pub struct Cli {
    /// Style document (JSON) to work on.
    #[arg(long, short = 'd', env = "STYLEBOOK_DOCUMENT")]
    pub document: PathBuf,

    /// Directory for persisted session state. In-memory when absent.
    #[arg(long, env = "STYLEBOOK_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Output mode.
    #[arg(long, value_enum, default_value_t = OutputMode::Auto, global = true)]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List styles matching the search.
    List(ListArgs),
    /// Show group paths with style counts.
    Groups,
    /// Show styles sharing the same typography.
    Duplicates,
    /// Show the font catalog and fonts used but not installed.
    Fonts,
    /// Bulk-edit the matching styles and commit.
    Edit(EditArgs),
    /// Dispatch a dialog message (JSON) and commit any resulting edits.
    Message(MessageArgs),
}

/// Search boxes. Without any, the persisted search is reused.
#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Case-insensitive pattern on the group path.
    #[arg(long)]
    pub group: Option<String>,
    /// Case-insensitive pattern on the simple name.
    #[arg(long)]
    pub name: Option<String>,
    /// Exact font family.
    #[arg(long)]
    pub family: Option<String>,
    /// Exact font style.
    #[arg(long)]
    pub style: Option<String>,
    /// Font size; 0 means any.
    #[arg(long = "size")]
    pub font_size: Option<String>,
    /// Line height: auto, <n>px or <n>%.
    #[arg(long)]
    pub line_height: Option<String>,
    /// Forget the persisted search.
    #[arg(long)]
    pub clear: bool,
}

impl SearchArgs {
    pub fn is_set(&self) -> bool {
        self.group.is_some()
            || self.name.is_some()
            || self.family.is_some()
            || self.style.is_some()
            || self.font_size.is_some()
            || self.line_height.is_some()
    }

    pub fn to_query(&self) -> SearchQuery {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        SearchQuery {
            group: field(&self.group),
            name: field(&self.name),
            family: field(&self.family),
            style: field(&self.style),
            font_size: field(&self.font_size),
            line_height: field(&self.line_height),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Which entries an edit applies to.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Style ids to select. Without any, every matching style is selected.
    #[arg(long = "id")]
    pub ids: Vec<String>,

    /// Show the pending changes without writing them.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// New group path; each style keeps its simple name.
    #[arg(long)]
    pub set_group: Option<String>,
    #[arg(long)]
    pub set_family: Option<String>,
    #[arg(long)]
    pub set_style: Option<String>,
    #[arg(long)]
    pub set_size: Option<String>,
    #[arg(long)]
    pub set_line_height: Option<String>,
    #[arg(long)]
    pub set_description: Option<String>,
}

impl EditArgs {
    pub fn bulk_edit(&self) -> BulkEdit {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        BulkEdit {
            group: field(&self.set_group),
            family: field(&self.set_family),
            style: field(&self.set_style),
            font_size: field(&self.set_size),
            line_height: field(&self.set_line_height),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct MessageArgs {
    /// The message, e.g. '{"type":"setFamilyAndWeight","family":"Inter","weight":"Bold"}'.
    pub json: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}
