//! Audit views: group overview and typographic duplicates.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::StyleRecord;

/// A group path and how many styles live directly in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub path: String,
    pub count: usize,
}

/// Styles that share the same font key, size and line height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSet {
    pub label: String,
    pub ids: Vec<String>,
}

/// Distinct group paths in first-seen order.
pub fn group_summaries<'a>(records: impl IntoIterator<Item = &'a StyleRecord>) -> Vec<GroupSummary> {
    let mut summaries: Vec<GroupSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let path = record.group_path();
        match index.get(path) {
            Some(&i) => summaries[i].count += 1,
            None => {
                index.insert(path, summaries.len());
                summaries.push(GroupSummary {
                    path: path.to_string(),
                    count: 1,
                });
            }
        }
    }
    summaries
}

/// Label identifying a record's typography.
///
/// ```
/// use stylebook::{typography_label, FontName, LineHeight, StyleRecord};
///
/// let record = StyleRecord::new("1", "Body", FontName::new("Inter", "Regular"), 16.0)
///     .with_line_height(LineHeight::pixels(24.0));
/// assert_eq!(typography_label(&record), "Inter Regular 16/24px");
/// ```
pub fn typography_label(record: &StyleRecord) -> String {
    format!(
        "{} {}/{}",
        record.font_name, record.font_size, record.line_height
    )
}

/// Sets of two or more records with the same typography label.
pub fn duplicates<'a>(records: impl IntoIterator<Item = &'a StyleRecord>) -> Vec<DuplicateSet> {
    let mut sets: Vec<DuplicateSet> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let label = typography_label(record);
        match index.get(&label) {
            Some(&i) => sets[i].ids.push(record.id.clone()),
            None => {
                index.insert(label.clone(), sets.len());
                sets.push(DuplicateSet {
                    label,
                    ids: vec![record.id.clone()],
                });
            }
        }
    }
    sets.retain(|set| set.ids.len() > 1);
    sets
}
