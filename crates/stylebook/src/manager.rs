//! The style manager: one object owning the engine state.
//!
//! [`StyleManager`] ties the snapshot, search, edit cache, selection, font
//! index and display flags together and persists each of them through a
//! [`StateStore`] after every mutation. It is what a host dialog drives.
//!
//! Operations that reseed the edit cache ([`search`](StyleManager::search),
//! [`clear_search`](StyleManager::clear_search),
//! [`cancel`](StyleManager::cancel) and [`commit`](StyleManager::commit))
//! throw away pending edits and the selection. Snapshot loads keep both for
//! styles still in the filtered view.

use std::collections::BTreeMap;

use serde::Serialize;
use stylebook_seeker::ParseError;
use tracing::{debug, info, warn};

use crate::audit::{self, DuplicateSet, GroupSummary};
use crate::bulk::BulkEdit;
use crate::cache::{CheckState, EditCache, FieldEdit, StyleField};
use crate::commit::{self, CommitReport, FieldWrite, Notification, Notifier, StyleStore};
use crate::error::{MessageError, StoreError};
use crate::fonts::{FontAvailability, FontStatus};
use crate::messages::{DialogMessage, MessageOutcome};
use crate::model::{FontName, StyleRecord, VariableField};
use crate::search::SearchQuery;
use crate::snapshot::Snapshot;
use crate::state::{slots, MemoryStateStore, Slot, StateStore};

/// Owns and persists the engine state.
pub struct StyleManager {
    state: Box<dyn StateStore>,
    fonts: FontAvailability,
    snapshot: Snapshot,
    search: SearchQuery,
    cache: EditCache,
    show_typo_group: BTreeMap<String, bool>,
    show_duplicate_typo_group: BTreeMap<String, bool>,
}

impl StyleManager {
    /// Creates a manager with in-memory state and no fonts.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> StyleManagerBuilder {
        StyleManagerBuilder::new()
    }

    /// Reloads every slot from the state store.
    ///
    /// Missing or corrupt slots fall back to defaults. Selected ids that are
    /// no longer in the cache are dropped.
    pub fn restore(&mut self) {
        let state = self.state.as_ref();
        self.snapshot = Snapshot::new(slots::SNAPSHOT.get(state));
        self.search = SearchQuery {
            group: slots::SEARCH_GROUP.get(state),
            name: slots::SEARCH_NAME.get(state),
            family: slots::SEARCH_FAMILY.get(state),
            style: slots::SEARCH_STYLE.get(state),
            font_size: slots::SEARCH_FONT_SIZE.get(state),
            line_height: slots::SEARCH_LINE_HEIGHT.get(state),
        };
        self.cache = EditCache::seeded(slots::EDIT_CACHE.get(state));
        self.cache.restore_selection(slots::SELECTION.get(state));
        self.show_typo_group = slots::SHOW_TYPO_GROUP.get(state);
        self.show_duplicate_typo_group = slots::SHOW_DUPLICATE_TYPO_GROUP.get(state);
        debug!(
            backend = self.state.name(),
            styles = self.snapshot.len(),
            cached = self.cache.len(),
            selected = self.cache.selection_len(),
            "state restored"
        );
    }

    // Accessors

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn search_query(&self) -> &SearchQuery {
        &self.search
    }

    pub fn cache(&self) -> &EditCache {
        &self.cache
    }

    pub fn fonts(&self) -> &FontAvailability {
        &self.fonts
    }

    pub fn state_store(&self) -> &dyn StateStore {
        self.state.as_ref()
    }

    /// Replaces the font index, e.g. after the host's catalog changed.
    pub fn set_font_catalog(&mut self, catalog: impl IntoIterator<Item = FontName>) {
        self.fonts = FontAvailability::from_catalog(catalog);
    }

    // Snapshot

    /// Replaces the snapshot and refreshes the cache under the current search.
    ///
    /// Pending edits and the selection survive for styles that are still in
    /// the filtered view.
    pub fn load_snapshot(&mut self, records: impl IntoIterator<Item = StyleRecord>) {
        self.snapshot = Snapshot::new(records);
        persist(self.state.as_mut(), slots::SNAPSHOT, self.snapshot.records());
        let compiled = self.search.compile();
        self.cache.refresh(compiled.filter(&self.snapshot));
        self.persist_cache();
    }

    /// Reads a fresh snapshot from `store`.
    ///
    /// On failure the current snapshot and cache are kept.
    pub async fn reload<S>(&mut self, store: &mut S) -> Result<usize, StoreError>
    where
        S: StyleStore + ?Sized,
    {
        let records = store.list_styles().await?;
        self.load_snapshot(records);
        Ok(self.snapshot.len())
    }

    // Search

    /// Sets the search and reseeds the cache from the filtered view.
    ///
    /// Pending edits and the selection are discarded. Returns the pattern
    /// errors found while compiling; a malformed pattern matches nothing.
    pub fn search(&mut self, query: SearchQuery) -> Vec<ParseError> {
        self.search = query;
        self.persist_search();
        self.reseed()
    }

    /// Clears every search box. Discards pending edits.
    pub fn clear_search(&mut self) {
        self.search(SearchQuery::default());
    }

    /// Reverts every cache entry to its snapshot values.
    pub fn cancel(&mut self) {
        self.reseed();
    }

    /// The filtered view, as cached.
    pub fn entries(&self) -> &[StyleRecord] {
        self.cache.records()
    }

    /// Cache entries whose group isn't hidden.
    pub fn visible_entries(&self) -> Vec<&StyleRecord> {
        self.cache
            .records()
            .iter()
            .filter(|record| is_shown(&self.show_typo_group, record.group_path()))
            .collect()
    }

    // Edits

    /// Overwrites one field of one cache entry. Unknown ids are ignored.
    pub fn edit_field(&mut self, id: &str, edit: FieldEdit) -> bool {
        let applied = self.cache.edit_field(id, edit);
        if applied {
            self.persist_cache();
        }
        applied
    }

    /// Like [`edit_field`](Self::edit_field), from free text. Unparseable
    /// numbers leave the entry unchanged.
    pub fn edit_field_text(&mut self, id: &str, field: StyleField, text: &str) -> bool {
        match FieldEdit::parse(field, text) {
            Some(edit) => self.edit_field(id, edit),
            None => {
                debug!(id, %field, text, "unparseable edit ignored");
                false
            }
        }
    }

    pub fn apply_bulk_edit(&mut self, edit: &BulkEdit) -> usize {
        let touched = self.cache.apply_bulk_edit(edit);
        self.persist_cache();
        touched
    }

    /// Sets family and style on every selected entry.
    pub fn set_font_for_selected(&mut self, font: &FontName) -> usize {
        let touched = self.cache.set_font_for_selected(font);
        self.persist_cache();
        touched
    }

    pub fn bind_variable(&mut self, id: &str, field: VariableField, variable_id: &str) -> bool {
        let bound = self.cache.bind_variable(id, field, variable_id);
        if bound {
            self.persist_cache();
        }
        bound
    }

    pub fn bind_variable_for_selected(&mut self, field: VariableField, variable_id: &str) -> usize {
        let touched = self.cache.bind_variable_for_selected(field, variable_id);
        self.persist_cache();
        touched
    }

    // Selection

    pub fn select(&mut self, id: &str) -> bool {
        let selected = self.cache.select(id);
        self.persist_selection();
        selected
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        let removed = self.cache.deselect(id);
        self.persist_selection();
        removed
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = self.cache.toggle(id);
        self.persist_selection();
        selected
    }

    pub fn select_all(&mut self) {
        self.cache.select_all();
        self.persist_selection();
    }

    pub fn deselect_all(&mut self) {
        self.cache.deselect_all();
        self.persist_selection();
    }

    pub fn all_selected(&self) -> bool {
        self.cache.all_selected()
    }

    pub fn check_state(&self) -> CheckState {
        self.cache.check_state()
    }

    // Commit

    /// Dirty cache entries and their writes, in cache order.
    pub fn pending_writes(&self) -> Vec<(&StyleRecord, Vec<FieldWrite>)> {
        commit::pending_writes(&self.snapshot, &self.cache)
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending_writes().is_empty()
    }

    /// Writes every pending edit, then starts over from a fresh snapshot.
    ///
    /// After the write loop the search is cleared, the snapshot is reloaded
    /// from `store` and the cache is reseeded from it. If the reload fails an
    /// error notification is sent and the previous snapshot is kept.
    pub async fn commit<S, N>(&mut self, store: &mut S, notifier: &mut N) -> CommitReport
    where
        S: StyleStore + ?Sized,
        N: Notifier + ?Sized,
    {
        let report = commit::commit(&self.snapshot, &self.cache, store, notifier).await;

        self.search = SearchQuery::default();
        self.persist_search();

        match store.list_styles().await {
            Ok(records) => {
                self.snapshot = Snapshot::new(records);
                persist(self.state.as_mut(), slots::SNAPSHOT, self.snapshot.records());
            }
            Err(err) => {
                warn!(error = %err, "reload after commit failed, keeping previous snapshot");
                notifier.notify(Notification::error(
                    format!("Could not reload styles: {}", err),
                    None,
                ));
            }
        }
        self.reseed();

        info!(
            records = report.records.len(),
            failed = report.failed(),
            "commit applied"
        );
        report
    }

    // Dialog messages

    /// Dispatches one dialog message.
    pub fn handle_message(&mut self, message: DialogMessage) -> MessageOutcome {
        debug!(kind = message.kind(), "dialog message");
        match message {
            DialogMessage::SetFamilyAndWeight { family, weight } => {
                let touched = self.set_font_for_selected(&FontName::new(family, weight));
                MessageOutcome::Edited { touched }
            }
            DialogMessage::SetVariable {
                variable_id,
                style_id,
                property_type,
            } => {
                let bound = self.bind_variable(&style_id, property_type, &variable_id);
                MessageOutcome::Edited {
                    touched: usize::from(bound),
                }
            }
            DialogMessage::SetVariableForSelected {
                variable_id,
                property_type,
            } => {
                let touched = self.bind_variable_for_selected(property_type, &variable_id);
                MessageOutcome::Edited { touched }
            }
            DialogMessage::SetShowTypoGroup { data } => {
                self.show_typo_group = data;
                persist(self.state.as_mut(), slots::SHOW_TYPO_GROUP, &self.show_typo_group);
                MessageOutcome::VisibilityChanged
            }
            DialogMessage::SetShowDuplicateTypoGroup { data } => {
                self.show_duplicate_typo_group = data;
                persist(
                    self.state.as_mut(),
                    slots::SHOW_DUPLICATE_TYPO_GROUP,
                    &self.show_duplicate_typo_group,
                );
                MessageOutcome::VisibilityChanged
            }
            DialogMessage::Close => MessageOutcome::Closed,
        }
    }

    /// Decodes and dispatches a JSON message. Malformed input changes
    /// nothing.
    pub fn handle_json(&mut self, json: &str) -> Result<MessageOutcome, MessageError> {
        let message = DialogMessage::from_json(json)?;
        Ok(self.handle_message(message))
    }

    // Audit

    /// Font availability of a cache entry (or, failing that, a snapshot
    /// record).
    pub fn font_status(&self, id: &str) -> Option<FontStatus> {
        self.cache
            .get(id)
            .or_else(|| self.snapshot.get(id))
            .map(|record| self.fonts.font_status(&record.font_name))
    }

    /// Groups of the whole snapshot.
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        audit::group_summaries(self.snapshot.records())
    }

    pub fn is_group_shown(&self, path: &str) -> bool {
        is_shown(&self.show_typo_group, path)
    }

    /// Duplicate sets of the whole snapshot.
    pub fn duplicates(&self) -> Vec<DuplicateSet> {
        audit::duplicates(self.snapshot.records())
    }

    /// Duplicate sets not hidden by the dialog.
    pub fn visible_duplicates(&self) -> Vec<DuplicateSet> {
        self.duplicates()
            .into_iter()
            .filter(|set| is_shown(&self.show_duplicate_typo_group, &set.label))
            .collect()
    }

    // Internals

    fn reseed(&mut self) -> Vec<ParseError> {
        let compiled = self.search.compile();
        self.cache.seed(compiled.filter(&self.snapshot));
        self.persist_cache();
        compiled.errors().to_vec()
    }

    fn persist_cache(&mut self) {
        persist(self.state.as_mut(), slots::EDIT_CACHE, self.cache.records());
        self.persist_selection();
    }

    fn persist_selection(&mut self) {
        let state = self.state.as_mut();
        persist(state, slots::SELECTION, &self.cache.selected_ids());
        persist(state, slots::ALL_SELECTED, &self.cache.all_selected());
    }

    fn persist_search(&mut self) {
        let state = self.state.as_mut();
        persist(state, slots::SEARCH_GROUP, &self.search.group);
        persist(state, slots::SEARCH_NAME, &self.search.name);
        persist(state, slots::SEARCH_FAMILY, &self.search.family);
        persist(state, slots::SEARCH_STYLE, &self.search.style);
        persist(state, slots::SEARCH_FONT_SIZE, &self.search.font_size);
        persist(state, slots::SEARCH_LINE_HEIGHT, &self.search.line_height);
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleManager")
            .field("state", &self.state.name())
            .field("snapshot", &self.snapshot.len())
            .field("search", &self.search)
            .field("cache", &self.cache.len())
            .field("selected", &self.cache.selection_len())
            .finish()
    }
}

fn is_shown(flags: &BTreeMap<String, bool>, key: &str) -> bool {
    flags.get(key).copied().unwrap_or(true)
}

/// Writes one slot, logging failures.
fn persist<T, V>(state: &mut dyn StateStore, slot: Slot<T>, value: &V)
where
    T: std::borrow::Borrow<V>,
    V: Serialize + ?Sized,
{
    if let Err(err) = slot.set(state, value) {
        warn!(slot = slot.name(), backend = state.name(), error = %err, "failed to persist state slot");
    }
}

/// Builder for [`StyleManager`].
#[derive(Default)]
pub struct StyleManagerBuilder {
    state: Option<Box<dyn StateStore>>,
    catalog: Vec<FontName>,
    snapshot: Option<Vec<StyleRecord>>,
}

impl StyleManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists slots in `store`. Defaults to [`MemoryStateStore`].
    pub fn state_store(mut self, store: impl StateStore + 'static) -> Self {
        self.state = Some(Box::new(store));
        self
    }

    /// Font catalog used for availability warnings.
    pub fn font_catalog(mut self, catalog: impl IntoIterator<Item = FontName>) -> Self {
        self.catalog.extend(catalog);
        self
    }

    /// Loads `records` after restoring state, replacing any restored
    /// snapshot.
    pub fn snapshot(mut self, records: impl IntoIterator<Item = StyleRecord>) -> Self {
        self.snapshot = Some(records.into_iter().collect());
        self
    }

    /// Builds the manager, restoring any persisted state first.
    pub fn build(self) -> StyleManager {
        let mut manager = StyleManager {
            state: self
                .state
                .unwrap_or_else(|| Box::new(MemoryStateStore::new())),
            fonts: FontAvailability::from_catalog(self.catalog),
            snapshot: Snapshot::default(),
            search: SearchQuery::default(),
            cache: EditCache::new(),
            show_typo_group: BTreeMap::new(),
            show_duplicate_typo_group: BTreeMap::new(),
        };
        manager.restore();
        if let Some(records) = self.snapshot {
            manager.load_snapshot(records);
        }
        manager
    }
}
