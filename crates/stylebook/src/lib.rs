//! Audit and bulk-edit engine for the text styles of a design document.
//!
//! The document itself, the persisted state and the dialog transport are
//! collaborators behind traits ([`StyleStore`], [`StateStore`], [`Notifier`]).
//! The engine owns the logic in between:
//!
//! ```text
//! Snapshot -> search/filter -> EditCache -> (row and bulk edits)
//!          -> commit diffs cache vs snapshot -> store writes -> reload
//! ```
//!
//! # Modules
//!
//! - [`model`]: [`StyleRecord`], [`FontName`], [`LineHeight`]
//! - [`line_height`]: the free-text line-height grammar
//! - [`snapshot`]: the immutable mirror of the document's styles
//! - [`search`]: [`SearchQuery`] compiled into a seeker query
//! - [`cache`]: [`EditCache`] with the selection, plus [`bulk`] edits
//! - [`commit`]: diffing and writing through a [`StyleStore`]
//! - [`fonts`]: [`FontAvailability`] warnings
//! - [`audit`]: group overview and duplicate detection
//! - [`state`]: typed persisted slots
//! - [`messages`]: dialog messages
//! - [`manager`]: [`StyleManager`], which ties it all together
//!
//! # Example
//!
//! ```
//! use stylebook::{BulkEdit, FontName, SearchQuery, StyleManager, StyleRecord};
//!
//! let mut manager = StyleManager::builder()
//!     .snapshot(vec![
//!         StyleRecord::new("1", "Old/H1", FontName::new("Inter", "Bold"), 32.0),
//!         StyleRecord::new("2", "Old/Body", FontName::new("Inter", "Regular"), 14.0),
//!         StyleRecord::new("3", "Caption", FontName::new("Inter", "Regular"), 12.0),
//!     ])
//!     .build();
//!
//! manager.search(SearchQuery::new().group("^old$"));
//! manager.select_all();
//! manager.apply_bulk_edit(&BulkEdit::new().group("New"));
//!
//! let names: Vec<_> = manager.entries().iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, vec!["New/H1", "New/Body"]);
//! assert_eq!(manager.pending_writes().len(), 2);
//! ```

pub mod audit;
pub mod bulk;
pub mod cache;
pub mod commit;
pub mod error;
pub mod fonts;
pub mod line_height;
pub mod manager;
pub mod messages;
pub mod model;
pub mod search;
pub mod snapshot;
pub mod state;

pub use audit::{duplicates, group_summaries, typography_label, DuplicateSet, GroupSummary};
pub use bulk::BulkEdit;
pub use cache::{CheckState, EditCache, FieldEdit, StyleField};
pub use commit::{
    commit, diff, pending_writes, CommitReport, FieldOutcome, FieldWrite, Notification,
    NotificationLevel, Notifier, RecordReport, RecordStatus, StyleStore,
};
pub use error::{MessageError, StateError, StoreError};
pub use fonts::{FontAvailability, FontStatus};
pub use line_height::parse_line_height;
pub use manager::{StyleManager, StyleManagerBuilder};
pub use messages::{DialogMessage, MessageOutcome};
pub use model::{group_path, simple_name, FontName, LineHeight, StyleRecord, VariableField};
pub use search::{filter, CompiledSearch, SearchQuery};
pub use snapshot::Snapshot;
pub use state::{FileStateStore, MemoryStateStore, Slot, StateStore};

pub use stylebook_seeker::ParseError;
