//! Serializable data handed to templates (and printed as-is in JSON mode).

use serde::Serialize;
use stylebook::{Notification, StyleManager, StyleRecord};

#[derive(Debug, Serialize)]
pub struct StyleRow {
    pub id: String,
    pub name: String,
    pub group: String,
    pub simple_name: String,
    pub font: String,
    pub size: String,
    pub line_height: String,
    pub description: String,
    pub selected: bool,
    pub warning: Option<&'static str>,
}

impl StyleRow {
    pub fn new(record: &StyleRecord, manager: &StyleManager) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            group: record.group_path().to_string(),
            simple_name: record.simple_name().to_string(),
            font: record.font_name.to_string(),
            size: record.font_size.to_string(),
            line_height: record.line_height.to_string(),
            description: record.description.clone(),
            selected: manager.cache().is_selected(&record.id),
            warning: manager
                .font_status(&record.id)
                .and_then(|status| status.reason()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListView {
    pub rows: Vec<StyleRow>,
    pub total: usize,
    pub hidden: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupRow {
    pub path: String,
    pub count: usize,
    pub shown: bool,
}

#[derive(Debug, Serialize)]
pub struct GroupsView {
    pub groups: Vec<GroupRow>,
}

#[derive(Debug, Serialize)]
pub struct DuplicateRow {
    pub label: String,
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub shown: bool,
}

#[derive(Debug, Serialize)]
pub struct DuplicatesView {
    pub sets: Vec<DuplicateRow>,
}

#[derive(Debug, Serialize)]
pub struct FamilyRow {
    pub family: String,
    pub styles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MissingFont {
    pub font: String,
    pub reason: &'static str,
    pub used_by: usize,
}

#[derive(Debug, Serialize)]
pub struct FontsView {
    pub families: Vec<FamilyRow>,
    pub missing: Vec<MissingFont>,
}

#[derive(Debug, Serialize)]
pub struct PendingRow {
    pub id: String,
    pub name: String,
    pub writes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteRow {
    pub level: &'static str,
    pub message: String,
    pub style_id: Option<String>,
}

impl From<&Notification> for NoteRow {
    fn from(note: &Notification) -> Self {
        Self {
            level: if note.is_error() { "error" } else { "success" },
            message: note.message.clone(),
            style_id: note.style_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommitView {
    pub dry_run: bool,
    pub touched: usize,
    pub pending: Vec<PendingRow>,
    pub notes: Vec<NoteRow>,
    pub committed: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub kind: &'static str,
    pub outcome: String,
}
