//! Commit: diff cached edits against the snapshot and write them out.
//!
//! For each cache entry that also exists in the snapshot, [`diff`] produces
//! the minimal list of [`FieldWrite`]s. Writes that touch typography need the
//! target font loaded first; if that fails the whole record is abandoned.
//! Every other write is attempted independently and its result kept in the
//! [`CommitReport`]. Each record produces exactly one [`Notification`].

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::cache::EditCache;
use crate::error::StoreError;
use crate::model::{FontName, LineHeight, StyleRecord, VariableField};
use crate::snapshot::Snapshot;

/// One field-level update sent to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWrite {
    Name(String),
    Description(String),
    FontName(FontName),
    FontSize(f64),
    LineHeight(LineHeight),
    /// `None` removes the binding.
    BoundVariable {
        field: VariableField,
        variable_id: Option<String>,
    },
}

impl FieldWrite {
    /// Whether the store must have the target font loaded before this write.
    pub fn needs_font(&self) -> bool {
        matches!(
            self,
            FieldWrite::FontName(_) | FieldWrite::FontSize(_) | FieldWrite::LineHeight(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldWrite::Name(_) => "name",
            FieldWrite::Description(_) => "description",
            FieldWrite::FontName(_) => "fontName",
            FieldWrite::FontSize(_) => "fontSize",
            FieldWrite::LineHeight(_) => "lineHeight",
            FieldWrite::BoundVariable { field, .. } => field.as_str(),
        }
    }
}

impl fmt::Display for FieldWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWrite::Name(name) => write!(f, "name = {:?}", name),
            FieldWrite::Description(text) => write!(f, "description = {:?}", text),
            FieldWrite::FontName(font) => write!(f, "fontName = {}", font),
            FieldWrite::FontSize(size) => write!(f, "fontSize = {}", size),
            FieldWrite::LineHeight(line_height) => write!(f, "lineHeight = {}", line_height),
            FieldWrite::BoundVariable {
                field,
                variable_id: Some(id),
            } => write!(f, "{} -> {}", field, id),
            FieldWrite::BoundVariable {
                field,
                variable_id: None,
            } => write!(f, "{} unbound", field),
        }
    }
}

/// Lists the writes that turn `original` into `edited`.
///
/// ```
/// use stylebook::{diff, FieldWrite, FontName, StyleRecord};
///
/// let original = StyleRecord::new("1", "Body", FontName::new("Inter", "Regular"), 14.0);
/// let mut edited = original.clone();
/// edited.font_size = 16.0;
///
/// assert_eq!(diff(&original, &edited), vec![FieldWrite::FontSize(16.0)]);
/// assert!(diff(&original, &original).is_empty());
/// ```
pub fn diff(original: &StyleRecord, edited: &StyleRecord) -> Vec<FieldWrite> {
    let mut writes = Vec::new();
    if original.name != edited.name {
        writes.push(FieldWrite::Name(edited.name.clone()));
    }
    if original.description != edited.description {
        writes.push(FieldWrite::Description(edited.description.clone()));
    }
    if original.font_name != edited.font_name {
        writes.push(FieldWrite::FontName(edited.font_name.clone()));
    }
    if original.font_size != edited.font_size {
        writes.push(FieldWrite::FontSize(edited.font_size));
    }
    if original.line_height != edited.line_height {
        writes.push(FieldWrite::LineHeight(edited.line_height));
    }
    for (field, variable_id) in &edited.bound_variables {
        if original.bound_variables.get(field) != Some(variable_id) {
            writes.push(FieldWrite::BoundVariable {
                field: *field,
                variable_id: Some(variable_id.clone()),
            });
        }
    }
    for field in original.bound_variables.keys() {
        if !edited.bound_variables.contains_key(field) {
            writes.push(FieldWrite::BoundVariable {
                field: *field,
                variable_id: None,
            });
        }
    }
    writes
}

/// The document the engine edits.
///
/// Calls are awaited one at a time; implementations don't need to handle
/// concurrent requests.
#[allow(async_fn_in_trait)]
pub trait StyleStore {
    /// Makes `font` usable for subsequent typography writes.
    async fn load_font(&mut self, font: &FontName) -> Result<(), StoreError>;

    /// Writes a single field of the style `id`.
    async fn write_field(&mut self, id: &str, write: &FieldWrite) -> Result<(), StoreError>;

    /// Enumerates the document's text styles in document order.
    async fn list_styles(&mut self) -> Result<Vec<StyleRecord>, StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// The record the message is about, if any.
    pub style_id: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>, style_id: Option<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            style_id,
        }
    }

    pub fn error(message: impl Into<String>, style_id: Option<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            style_id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Receives notifications as they happen.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Result of one attempted field write.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    pub write: FieldWrite,
    pub result: Result<(), StoreError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordStatus {
    /// Every write succeeded.
    Committed,
    /// At least one write failed.
    Failed,
    /// Nothing was written because the font couldn't be loaded.
    Abandoned(StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub id: String,
    pub name: String,
    pub status: RecordStatus,
    pub fields: Vec<FieldOutcome>,
}

impl RecordReport {
    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields.iter().filter(|outcome| outcome.result.is_err())
    }
}

/// Per-record, per-field results of a commit. Only dirty records appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitReport {
    pub records: Vec<RecordReport>,
}

impl CommitReport {
    pub fn committed(&self) -> usize {
        self.count(|status| matches!(status, RecordStatus::Committed))
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.committed()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&RecordStatus) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Lists each dirty cache entry with its writes, in cache order.
pub fn pending_writes<'a>(
    snapshot: &'a Snapshot,
    cache: &'a EditCache,
) -> Vec<(&'a StyleRecord, Vec<FieldWrite>)> {
    let originals: HashMap<&str, &StyleRecord> = snapshot
        .iter()
        .map(|record| (record.id.as_str(), record))
        .collect();

    cache
        .records()
        .iter()
        .filter_map(|edited| {
            let original = originals.get(edited.id.as_str())?;
            let writes = diff(original, edited);
            (!writes.is_empty()).then_some((edited, writes))
        })
        .collect()
}

/// Writes every cached edit through `store`.
///
/// Failures are recorded and notified per record; the loop always visits
/// every entry. Entries missing from the snapshot are skipped.
pub async fn commit<S, N>(
    snapshot: &Snapshot,
    cache: &EditCache,
    store: &mut S,
    notifier: &mut N,
) -> CommitReport
where
    S: StyleStore + ?Sized,
    N: Notifier + ?Sized,
{
    let mut report = CommitReport::default();

    for (edited, writes) in pending_writes(snapshot, cache) {
        let record = commit_record(edited, writes, store).await;
        notifier.notify(notification_for(&record));
        report.records.push(record);
    }

    info!(
        committed = report.committed(),
        failed = report.failed(),
        "commit finished"
    );
    report
}

async fn commit_record<S>(edited: &StyleRecord, writes: Vec<FieldWrite>, store: &mut S) -> RecordReport
where
    S: StyleStore + ?Sized,
{
    let mut report = RecordReport {
        id: edited.id.clone(),
        name: edited.name.clone(),
        status: RecordStatus::Committed,
        fields: Vec::with_capacity(writes.len()),
    };

    if writes.iter().any(FieldWrite::needs_font) {
        if let Err(err) = store.load_font(&edited.font_name).await {
            warn!(id = %edited.id, font = %edited.font_name, error = %err, "font load failed, record abandoned");
            report.status = RecordStatus::Abandoned(err);
            return report;
        }
    }

    for write in writes {
        let result = store.write_field(&edited.id, &write).await;
        match &result {
            Ok(()) => debug!(id = %edited.id, field = write.label(), "field written"),
            Err(err) => {
                warn!(id = %edited.id, field = write.label(), error = %err, "field write failed");
                report.status = RecordStatus::Failed;
            }
        }
        report.fields.push(FieldOutcome { write, result });
    }
    report
}

fn notification_for(record: &RecordReport) -> Notification {
    let id = Some(record.id.clone());
    match &record.status {
        RecordStatus::Committed => Notification::success(format!("Updated {}", record.name), id),
        RecordStatus::Abandoned(err) => {
            Notification::error(format!("Could not update {}: {}", record.name, err), id)
        }
        RecordStatus::Failed => {
            let detail: Vec<String> = record
                .failures()
                .filter_map(|outcome| outcome.result.as_ref().err())
                .map(ToString::to_string)
                .collect();
            Notification::error(
                format!("Could not update {}: {}", record.name, detail.join("; ")),
                id,
            )
        }
    }
}
