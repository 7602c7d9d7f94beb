//! Style search: text predicates compiled into a seeker query.
//!
//! A [`SearchQuery`] holds what the user typed into the six search boxes.
//! [`SearchQuery::compile`] turns it into a [`CompiledSearch`]:
//!
//! | Box | Field | Rule |
//! |-----|-------|------|
//! | group | group path | case-insensitive regex |
//! | name | simple name | case-insensitive regex |
//! | family | font family | exact |
//! | style | font style | exact |
//! | font size | font size | numeric equality; `0` or non-numeric means no constraint |
//! | line height | line height | same unit, value equal at 3 significant digits |
//!
//! Empty boxes impose no constraint and the boxes are ANDed together.
//! A malformed pattern compiles to a clause that matches nothing; the error
//! is kept on the compiled search so callers can show it.

use serde::{Deserialize, Serialize};
use stylebook_seeker::{parse_number, parse_value, Clause, Op, ParseError, Query};
use tracing::warn;

use crate::model::StyleRecord;
use crate::snapshot::Snapshot;

/// Raw search box contents. All fields empty means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub group: String,
    pub name: String,
    pub family: String,
    pub style: String,
    pub font_size: String,
    pub line_height: String,
}

impl SearchQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, pattern: impl Into<String>) -> Self {
        self.group = pattern.into();
        self
    }

    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.name = pattern.into();
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

    /// Returns `true` when no box has content.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
            && self.name.is_empty()
            && self.family.is_empty()
            && self.style.is_empty()
            && self.font_size.is_empty()
            && self.line_height.is_empty()
    }

    /// Compiles the boxes into a query.
    ///
    /// Never fails: malformed patterns become match-nothing clauses and are
    /// reported through [`CompiledSearch::errors`]. Unparseable size or
    /// line-height text is ignored.
    pub fn compile(&self) -> CompiledSearch {
        let mut compiled = CompiledSearch::default();

        compiled.pattern(StyleRecord::GROUP, &self.group);
        compiled.pattern(StyleRecord::NAME, &self.name);
        compiled.exact(StyleRecord::FAMILY, &self.family);
        compiled.exact(StyleRecord::STYLE, &self.style);

        if !self.font_size.is_empty() {
            match parse_number(StyleRecord::SIZE, &self.font_size) {
                Ok(size) if size != 0.0 => compiled.push(StyleRecord::SIZE, &self.font_size),
                _ => {}
            }
        }

        if !self.line_height.is_empty() {
            // Unrecognized line heights impose no constraint.
            if parse_value::<StyleRecord>(StyleRecord::LINE_HEIGHT, Op::Eq, &self.line_height)
                .is_ok()
            {
                compiled.push(StyleRecord::LINE_HEIGHT, &self.line_height);
            }
        }

        compiled
    }
}

/// A search ready to run against snapshots.
#[derive(Debug, Clone, Default)]
pub struct CompiledSearch {
    query: Query,
    errors: Vec<ParseError>,
}

impl CompiledSearch {
    fn pattern(&mut self, field: &str, pattern: &str) {
        if pattern.is_empty() {
            return;
        }
        match parse_value::<StyleRecord>(field, Op::Regex, pattern) {
            Ok(value) => self.query.push(Clause::new(field, Op::Regex, value)),
            Err(err) => {
                warn!(field, pattern, error = %err, "malformed search pattern matches nothing");
                self.query.push(Clause::nothing(field));
                self.errors.push(err);
            }
        }
    }

    fn exact(&mut self, field: &str, text: &str) {
        if !text.is_empty() {
            self.push(field, text);
        }
    }

    fn push(&mut self, field: &str, text: &str) {
        match parse_value::<StyleRecord>(field, Op::Eq, text) {
            Ok(value) => self.query.push(Clause::new(field, Op::Eq, value)),
            Err(err) => self.errors.push(err),
        }
    }

    /// Pattern errors found while compiling.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The underlying seeker query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Tests one record.
    pub fn matches(&self, record: &StyleRecord) -> bool {
        self.query.matches(record)
    }

    /// Returns value copies of the matching records, in snapshot order.
    pub fn filter(&self, snapshot: &Snapshot) -> Vec<StyleRecord> {
        self.query
            .filter(snapshot.records())
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Filters `snapshot` by `search`.
///
/// ```
/// use stylebook::{filter, FontName, SearchQuery, Snapshot, StyleRecord};
///
/// let snapshot = Snapshot::new(vec![
///     StyleRecord::new("1", "Body/M", FontName::new("Inter", "Regular"), 14.0),
///     StyleRecord::new("2", "Body/L", FontName::new("Inter", "Regular"), 16.0),
///     StyleRecord::new("3", "Body/M", FontName::new("Roboto", "Regular"), 14.0),
/// ]);
///
/// let hits = filter(&snapshot, &SearchQuery::new().family("Inter").font_size("14"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, "1");
/// ```
pub fn filter(snapshot: &Snapshot, search: &SearchQuery) -> Vec<StyleRecord> {
    search.compile().filter(snapshot)
}
