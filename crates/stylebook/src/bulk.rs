//! Bulk edits over the selected cache entries.

use serde::{Deserialize, Serialize};
use stylebook_seeker::parse_number;
use tracing::debug;

use crate::cache::EditCache;
use crate::line_height::parse_line_height;
use crate::model::{simple_name, StyleRecord};

/// Raw bulk-edit form contents. Empty fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkEdit {
    /// New group path; keeps each record's simple name.
    pub group: String,
    pub family: String,
    pub style: String,
    pub font_size: String,
    pub line_height: String,
}

impl BulkEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    pub fn line_height(mut self, line_height: impl Into<String>) -> Self {
        self.line_height = line_height.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
            && self.family.is_empty()
            && self.style.is_empty()
            && self.font_size.is_empty()
            && self.line_height.is_empty()
    }

    fn apply_to(&self, record: &mut StyleRecord, size: Option<f64>) {
        if !self.group.is_empty() {
            record.name = format!("{}/{}", self.group, simple_name(&record.name));
        }
        if !self.family.is_empty() {
            record.font_name.family = self.family.clone();
        }
        if !self.style.is_empty() {
            record.font_name.style = self.style.clone();
        }
        if let Some(size) = size {
            record.font_size = size;
        }
        if let Some(line_height) = parse_line_height(&self.line_height) {
            record.line_height = line_height;
        }
    }
}

impl EditCache {
    /// Applies `edit` to every selected entry and returns how many were
    /// touched.
    ///
    /// Family edits leave the style as it is, even if the new family has no
    /// face with that style. Unparseable size or line-height text is
    /// ignored.
    ///
    /// ```
    /// use stylebook::{BulkEdit, EditCache, FontName, StyleRecord};
    ///
    /// let mut cache = EditCache::seeded(vec![
    ///     StyleRecord::new("1", "A/B/Leaf", FontName::new("Inter", "Regular"), 14.0),
    /// ]);
    /// cache.select_all();
    /// cache.apply_bulk_edit(&BulkEdit::new().group("X/Y"));
    /// assert_eq!(cache.get("1").unwrap().name, "X/Y/Leaf");
    /// ```
    pub fn apply_bulk_edit(&mut self, edit: &BulkEdit) -> usize {
        let size = if edit.font_size.is_empty() {
            None
        } else {
            parse_number(StyleRecord::SIZE, &edit.font_size)
                .ok()
                .filter(|size| size.is_finite() && *size > 0.0)
        };

        let mut touched = 0;
        for id in self.selected_ids() {
            if let Some(record) = self.get_mut(&id) {
                edit.apply_to(record, size);
                touched += 1;
            }
        }
        debug!(touched, "bulk edit applied");
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontName, LineHeight};

    fn cache() -> EditCache {
        let mut cache = EditCache::seeded(vec![
            StyleRecord::new("1", "A/B/Leaf", FontName::new("Inter", "Regular"), 14.0),
            StyleRecord::new("2", "Plain", FontName::new("Inter", "Bold"), 16.0)
                .with_line_height(LineHeight::pixels(24.0)),
            StyleRecord::new("3", "Other/Thing", FontName::new("Roboto", "Regular"), 12.0),
        ]);
        cache.select("1");
        cache.select("2");
        cache
    }

    #[test]
    fn test_group_edit_keeps_simple_name() {
        let mut cache = cache();
        assert_eq!(cache.apply_bulk_edit(&BulkEdit::new().group("X/Y")), 2);
        assert_eq!(cache.get("1").unwrap().name, "X/Y/Leaf");
        assert_eq!(cache.get("2").unwrap().name, "X/Y/Plain");
        assert_eq!(cache.get("3").unwrap().name, "Other/Thing");
    }

    #[test]
    fn test_family_edit_keeps_style() {
        let mut cache = cache();
        cache.apply_bulk_edit(&BulkEdit::new().family("Roboto"));
        assert_eq!(
            cache.get("2").unwrap().font_name,
            FontName::new("Roboto", "Bold")
        );
    }

    #[test]
    fn test_invalid_numbers_are_ignored() {
        let mut cache = cache();
        cache.apply_bulk_edit(&BulkEdit::new().font_size("huge").line_height("tall"));
        assert_eq!(cache.get("1").unwrap().font_size, 14.0);
        assert_eq!(cache.get("2").unwrap().line_height, LineHeight::pixels(24.0));
    }

    #[test]
    fn test_non_positive_size_is_ignored() {
        let mut cache = cache();
        cache.apply_bulk_edit(&BulkEdit::new().font_size("0"));
        cache.apply_bulk_edit(&BulkEdit::new().font_size("-12"));
        assert_eq!(cache.get("1").unwrap().font_size, 14.0);
        assert_eq!(cache.get("2").unwrap().font_size, 16.0);
    }

    #[test]
    fn test_size_and_line_height_applied() {
        let mut cache = cache();
        cache.apply_bulk_edit(&BulkEdit::new().font_size("20").line_height("150%"));
        for id in ["1", "2"] {
            let record = cache.get(id).unwrap();
            assert_eq!(record.font_size, 20.0);
            assert_eq!(record.line_height, LineHeight::percent(150.0));
        }
        assert_eq!(cache.get("3").unwrap().font_size, 12.0);
    }

    #[test]
    fn test_empty_edit_changes_nothing() {
        let mut cache = cache();
        let before = cache.records().to_vec();
        assert!(BulkEdit::new().is_empty());
        cache.apply_bulk_edit(&BulkEdit::new());
        assert_eq!(cache.records(), before.as_slice());
    }
}
