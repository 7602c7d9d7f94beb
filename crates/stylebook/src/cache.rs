//! Edit cache: working copies of the filtered styles plus the selection.
//!
//! The cache is seeded from the filtered view and accumulates per-row and
//! bulk edits until they are committed or thrown away. Every id in the
//! selection is a cache key; reseeding clears the selection.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use stylebook_seeker::parse_number;
use tracing::debug;

use crate::line_height::parse_line_height;
use crate::model::{FontName, LineHeight, StyleRecord, VariableField};

/// An editable field of a style row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleField {
    Name,
    Description,
    FontFamily,
    FontStyle,
    FontSize,
    LineHeight,
}

impl StyleField {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleField::Name => "name",
            StyleField::Description => "description",
            StyleField::FontFamily => "fontFamily",
            StyleField::FontStyle => "fontStyle",
            StyleField::FontSize => "fontSize",
            StyleField::LineHeight => "lineHeight",
        }
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed edit of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Name(String),
    Description(String),
    FontFamily(String),
    FontStyle(String),
    FontSize(f64),
    LineHeight(LineHeight),
}

impl FieldEdit {
    /// Builds an edit from free text.
    ///
    /// Returns `None` when numeric or line-height text can't be parsed, which
    /// callers treat as "no change requested".
    ///
    /// ```
    /// use stylebook::{FieldEdit, LineHeight, StyleField};
    ///
    /// assert_eq!(FieldEdit::parse(StyleField::FontSize, "18"), Some(FieldEdit::FontSize(18.0)));
    /// assert_eq!(FieldEdit::parse(StyleField::FontSize, "big"), None);
    /// assert_eq!(
    ///     FieldEdit::parse(StyleField::LineHeight, "120%"),
    ///     Some(FieldEdit::LineHeight(LineHeight::percent(120.0)))
    /// );
    /// ```
    pub fn parse(field: StyleField, text: &str) -> Option<Self> {
        match field {
            StyleField::Name => Some(FieldEdit::Name(text.to_string())),
            StyleField::Description => Some(FieldEdit::Description(text.to_string())),
            StyleField::FontFamily => Some(FieldEdit::FontFamily(text.to_string())),
            StyleField::FontStyle => Some(FieldEdit::FontStyle(text.to_string())),
            StyleField::FontSize => parse_number(field.as_str(), text)
                .ok()
                .filter(|size| size.is_finite() && *size > 0.0)
                .map(FieldEdit::FontSize),
            StyleField::LineHeight => parse_line_height(text).map(FieldEdit::LineHeight),
        }
    }

    pub fn field(&self) -> StyleField {
        match self {
            FieldEdit::Name(_) => StyleField::Name,
            FieldEdit::Description(_) => StyleField::Description,
            FieldEdit::FontFamily(_) => StyleField::FontFamily,
            FieldEdit::FontStyle(_) => StyleField::FontStyle,
            FieldEdit::FontSize(_) => StyleField::FontSize,
            FieldEdit::LineHeight(_) => StyleField::LineHeight,
        }
    }

    pub(crate) fn apply(self, record: &mut StyleRecord) {
        match self {
            FieldEdit::Name(name) => record.name = name,
            FieldEdit::Description(description) => record.description = description,
            FieldEdit::FontFamily(family) => record.font_name.family = family,
            FieldEdit::FontStyle(style) => record.font_name.style = style,
            FieldEdit::FontSize(size) => record.font_size = size,
            FieldEdit::LineHeight(line_height) => record.line_height = line_height,
        }
    }
}

/// Tri-state of the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Working copies of the filtered styles, in view order, with the selection.
#[derive(Debug, Clone, Default)]
pub struct EditCache {
    entries: Vec<StyleRecord>,
    index: HashMap<String, usize>,
    selection: BTreeSet<String>,
    all_selected: bool,
}

impl EditCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache seeded from `records`.
    pub fn seeded(records: impl IntoIterator<Item = StyleRecord>) -> Self {
        let mut cache = Self::new();
        cache.seed(records);
        cache
    }

    /// Replaces every entry with fresh copies of `records`.
    ///
    /// Pending edits and the selection are discarded. Records whose id is
    /// already present are skipped.
    pub fn seed(&mut self, records: impl IntoIterator<Item = StyleRecord>) {
        self.entries.clear();
        self.index.clear();
        for record in records {
            if self.index.contains_key(&record.id) {
                continue;
            }
            self.index.insert(record.id.clone(), self.entries.len());
            self.entries.push(record);
        }
        self.selection.clear();
        self.all_selected = false;
        debug!(entries = self.entries.len(), "edit cache reseeded");
    }

    /// Rebuilds the entries from `records`, keeping the working copy of every
    /// id that is already cached.
    ///
    /// Entries follow the order of `records`. Ids missing from `records` lose
    /// their pending edits and leave the selection.
    pub fn refresh(&mut self, records: impl IntoIterator<Item = StyleRecord>) {
        let mut previous = std::mem::take(&mut self.entries);
        let old_index = std::mem::take(&mut self.index);
        for record in records {
            if self.index.contains_key(&record.id) {
                continue;
            }
            let entry = match old_index.get(&record.id) {
                Some(&i) => std::mem::replace(&mut previous[i], record),
                None => record,
            };
            self.index.insert(entry.id.clone(), self.entries.len());
            self.entries.push(entry);
        }
        let index = &self.index;
        self.selection.retain(|id| index.contains_key(id));
        self.sync_all_selected();
        debug!(
            entries = self.entries.len(),
            selected = self.selection.len(),
            "edit cache refreshed"
        );
    }

    /// Entries in view order.
    pub fn records(&self) -> &[StyleRecord] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&StyleRecord> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut StyleRecord> {
        match self.index.get(id) {
            Some(&i) => self.entries.get_mut(i),
            None => None,
        }
    }

    /// Overwrites one field of one entry.
    ///
    /// Returns `false`, changing nothing, when `id` is not in the cache.
    pub fn edit_field(&mut self, id: &str, edit: FieldEdit) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                edit.apply(record);
                true
            }
            None => {
                debug!(id, "edit on stale cache entry ignored");
                false
            }
        }
    }

    /// Stages a variable binding on one entry.
    pub fn bind_variable(&mut self, id: &str, field: VariableField, variable_id: &str) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record
                    .bound_variables
                    .insert(field, variable_id.to_string());
                true
            }
            None => false,
        }
    }

    /// Stages a variable binding on every selected entry.
    pub fn bind_variable_for_selected(&mut self, field: VariableField, variable_id: &str) -> usize {
        let ids = self.selected_ids();
        ids.iter()
            .filter(|id| self.bind_variable(id, field, variable_id))
            .count()
    }

    /// Sets family and style on every selected entry.
    pub fn set_font_for_selected(&mut self, font_name: &FontName) -> usize {
        let ids = self.selected_ids();
        let mut touched = 0;
        for id in &ids {
            if let Some(record) = self.get_mut(id) {
                record.font_name = font_name.clone();
                touched += 1;
            }
        }
        touched
    }

    // Selection

    pub fn select(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.selection.insert(id.to_string());
        self.sync_all_selected();
        true
    }

    pub fn deselect(&mut self, id: &str) -> bool {
        let removed = self.selection.remove(id);
        self.all_selected = false;
        removed
    }

    /// Flips one id's selection. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.contains(id) {
            self.deselect(id);
            false
        } else {
            self.select(id)
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.index.keys().cloned().collect();
        self.all_selected = !self.entries.is_empty();
        debug!(selected = self.selection.len(), "selected all");
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
        self.all_selected = false;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Selected ids in view order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|record| self.selection.contains(&record.id))
            .map(|record| record.id.clone())
            .collect()
    }

    pub fn check_state(&self) -> CheckState {
        if self.selection.is_empty() {
            CheckState::Unchecked
        } else if self.all_selected {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    /// Restores a persisted selection, dropping ids no longer in the cache.
    pub fn restore_selection(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selection = ids.into_iter().filter(|id| self.contains(id)).collect();
        self.sync_all_selected();
    }

    fn sync_all_selected(&mut self) {
        self.all_selected = !self.entries.is_empty() && self.selection.len() == self.entries.len();
    }
}
