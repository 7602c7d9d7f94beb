//! The `stylebook` command-line tool.
//!
//! Loads a JSON style document, drives a [`StyleManager`] over it and renders
//! the results through minijinja templates with console styling (or as JSON).
//! Edits are committed back into the document file.

pub mod cli;
pub mod document;
pub mod output;
pub mod render;
pub mod util;
pub mod views;

use std::path::{Path, PathBuf};

use anyhow::Context;
use pollster::block_on;
use stylebook::{DialogMessage, FieldEdit, FileStateStore, MessageOutcome, Notification, StyleManager};
use tracing::{info, warn};

use crate::cli::{Cli, Command, EditArgs, ListArgs, MessageArgs, SearchArgs, SelectionArgs};
use crate::document::Document;
use crate::render::{Renderer, Theme};
use crate::views::{
    CommitView, DuplicateRow, DuplicatesView, FamilyRow, FontsView, GroupRow, GroupsView,
    ListView, MessageView, MissingFont, NoteRow, PendingRow, StyleRow,
};

pub use output::OutputMode;
pub use util::{pad_right, truncate_to_width};

/// Rendered command output.
#[derive(Debug)]
pub struct Report {
    pub output: String,
    /// `false` when any commit write failed.
    pub success: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Runs one command.
pub fn run(cli: Cli) -> anyhow::Result<Report> {
    let Cli {
        document: path,
        state_dir,
        output,
        command,
    } = cli;

    let renderer =
        Renderer::new(Theme::standard(), output).context("failed to set up templates")?;
    let mut document = Document::load(&path)?;
    let mut manager = open_manager(&document, &path, state_dir);

    match command {
        Command::List(args) => list(&mut manager, &args, &renderer),
        Command::Groups => groups(&manager, &renderer),
        Command::Duplicates => duplicates(&manager, &renderer),
        Command::Fonts => fonts(&manager, &renderer),
        Command::Edit(args) => edit(&mut manager, &mut document, &path, &args, &renderer),
        Command::Message(args) => message(&mut manager, &mut document, &path, &args, &renderer),
    }
}

fn open_manager(document: &Document, path: &Path, state_dir: Option<PathBuf>) -> StyleManager {
    let builder = StyleManager::builder()
        .font_catalog(document.fonts.iter().cloned())
        .snapshot(document.styles.iter().cloned());
    match state_dir {
        Some(dir) => builder
            .state_store(FileStateStore::new(state_dir_for(&dir, path)))
            .build(),
        None => builder.build(),
    }
}

/// State lives in a subdirectory named after the document.
fn state_dir_for(dir: &Path, document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    dir.join(stem)
}

fn apply_search(manager: &mut StyleManager, search: &SearchArgs) -> Vec<String> {
    if search.clear {
        manager.clear_search();
    }
    let errors = if search.is_set() {
        manager.search(search.to_query())
    } else {
        manager.search_query().compile().errors().to_vec()
    };
    errors.iter().map(ToString::to_string).collect()
}

fn list(manager: &mut StyleManager, args: &ListArgs, renderer: &Renderer) -> anyhow::Result<Report> {
    let errors = apply_search(manager, &args.search);
    let visible = manager.visible_entries();
    let view = ListView {
        hidden: manager.entries().len() - visible.len(),
        rows: visible
            .into_iter()
            .map(|record| StyleRow::new(record, manager))
            .collect(),
        total: manager.snapshot().len(),
        errors,
    };
    Ok(Report::ok(renderer.render("list", &view)?))
}

fn groups(manager: &StyleManager, renderer: &Renderer) -> anyhow::Result<Report> {
    let view = GroupsView {
        groups: manager
            .group_summaries()
            .into_iter()
            .map(|summary| GroupRow {
                shown: manager.is_group_shown(&summary.path),
                path: summary.path,
                count: summary.count,
            })
            .collect(),
    };
    Ok(Report::ok(renderer.render("groups", &view)?))
}

fn duplicates(manager: &StyleManager, renderer: &Renderer) -> anyhow::Result<Report> {
    let visible: Vec<String> = manager
        .visible_duplicates()
        .into_iter()
        .map(|set| set.label)
        .collect();
    let view = DuplicatesView {
        sets: manager
            .duplicates()
            .into_iter()
            .map(|set| DuplicateRow {
                shown: visible.contains(&set.label),
                names: set
                    .ids
                    .iter()
                    .filter_map(|id| manager.snapshot().get(id))
                    .map(|record| record.name.clone())
                    .collect(),
                label: set.label,
                ids: set.ids,
            })
            .collect(),
    };
    Ok(Report::ok(renderer.render("duplicates", &view)?))
}

fn fonts(manager: &StyleManager, renderer: &Renderer) -> anyhow::Result<Report> {
    let mut missing: Vec<MissingFont> = Vec::new();
    for record in manager.snapshot() {
        let status = manager.fonts().font_status(&record.font_name);
        let Some(reason) = status.reason() else {
            continue;
        };
        let font = record.font_name.to_string();
        match missing.iter_mut().find(|m| m.font == font) {
            Some(entry) => entry.used_by += 1,
            None => missing.push(MissingFont {
                font,
                reason,
                used_by: 1,
            }),
        }
    }

    let view = FontsView {
        families: manager
            .fonts()
            .families()
            .map(|(family, styles)| FamilyRow {
                family: family.to_string(),
                styles: styles.to_vec(),
            })
            .collect(),
        missing,
    };
    Ok(Report::ok(renderer.render("fonts", &view)?))
}

fn select(manager: &mut StyleManager, selection: &SelectionArgs) {
    if selection.ids.is_empty() {
        manager.select_all();
        return;
    }
    for id in &selection.ids {
        if !manager.select(id) {
            warn!(id = %id, "id not in the current view, ignored");
        }
    }
}

fn edit(
    manager: &mut StyleManager,
    document: &mut Document,
    path: &Path,
    args: &EditArgs,
    renderer: &Renderer,
) -> anyhow::Result<Report> {
    let errors = apply_search(manager, &args.search);
    if !errors.is_empty() {
        anyhow::bail!("invalid search: {}", errors.join("; "));
    }
    select(manager, &args.selection);

    let mut touched = manager.apply_bulk_edit(&args.bulk_edit());
    if let Some(description) = &args.set_description {
        let ids = manager.cache().selected_ids();
        touched = touched.max(ids.len());
        for id in ids {
            manager.edit_field(&id, FieldEdit::Description(description.clone()));
        }
    }
    finish(manager, document, path, args.selection.dry_run, touched, renderer)
}

fn message(
    manager: &mut StyleManager,
    document: &mut Document,
    path: &Path,
    args: &MessageArgs,
    renderer: &Renderer,
) -> anyhow::Result<Report> {
    let message =
        DialogMessage::from_json(&args.json).context("could not decode dialog message")?;
    let kind = message.kind();

    select(manager, &args.selection);
    let outcome = manager.handle_message(message);

    match outcome {
        MessageOutcome::Edited { touched } => {
            finish(manager, document, path, args.selection.dry_run, touched, renderer)
        }
        MessageOutcome::VisibilityChanged | MessageOutcome::Closed => {
            if outcome == MessageOutcome::Closed {
                manager.cancel();
            }
            let view = MessageView {
                kind,
                outcome: format!("{:?}", outcome),
            };
            Ok(Report::ok(renderer.render("message", &view)?))
        }
    }
}

/// Shows the pending writes, or commits them and saves the document.
fn finish(
    manager: &mut StyleManager,
    document: &mut Document,
    path: &Path,
    dry_run: bool,
    touched: usize,
    renderer: &Renderer,
) -> anyhow::Result<Report> {
    let pending: Vec<PendingRow> = manager
        .pending_writes()
        .into_iter()
        .map(|(record, writes)| PendingRow {
            id: record.id.clone(),
            name: record.name.clone(),
            writes: writes.iter().map(ToString::to_string).collect(),
        })
        .collect();

    if dry_run {
        let view = CommitView {
            dry_run,
            touched,
            pending,
            notes: Vec::new(),
            committed: 0,
            failed: 0,
        };
        return Ok(Report::ok(renderer.render("commit", &view)?));
    }

    let mut notes: Vec<Notification> = Vec::new();
    let report = block_on(manager.commit(document, &mut notes));
    document.save(path)?;
    info!(
        committed = report.committed(),
        failed = report.failed(),
        path = %path.display(),
        "document updated"
    );

    let view = CommitView {
        dry_run,
        touched,
        pending,
        notes: notes.iter().map(NoteRow::from).collect(),
        committed: report.committed(),
        failed: report.failed(),
    };
    Ok(Report {
        output: renderer.render("commit", &view)?,
        success: report.is_clean() && !notes.iter().any(Notification::is_error),
    })
}
