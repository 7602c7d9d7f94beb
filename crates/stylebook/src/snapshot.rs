//! Point-in-time mirror of the document's text styles.

use std::collections::HashSet;

use tracing::warn;

use crate::model::StyleRecord;

/// The document's styles as of the last full load.
///
/// Records keep the store's enumeration order. A snapshot never changes in
/// place; a reload produces a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<StyleRecord>,
}

impl Snapshot {
    /// Builds a snapshot, keeping the first record for each id.
    ///
    /// Later records with an already-seen id are dropped and logged.
    pub fn new(records: impl IntoIterator<Item = StyleRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id.clone());
                if !fresh {
                    warn!(id = %record.id, name = %record.name, "duplicate style id in snapshot, skipping");
                }
                fresh
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[StyleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleRecord> {
        self.records.iter()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&StyleRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a StyleRecord;
    type IntoIter = std::slice::Iter<'a, StyleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontName;

    fn record(id: &str, name: &str) -> StyleRecord {
        StyleRecord::new(id, name, FontName::new("Inter", "Regular"), 14.0)
    }

    #[test]
    fn test_preserves_order() {
        let snapshot = Snapshot::new(vec![record("b", "Body"), record("a", "Caption")]);
        let ids: Vec<_> = snapshot.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let snapshot = Snapshot::new(vec![
            record("a", "First"),
            record("b", "Other"),
            record("a", "Second"),
        ]);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("a").unwrap().name, "First");
    }

    #[test]
    fn test_get_missing() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.get("nope").is_none());
    }
}
