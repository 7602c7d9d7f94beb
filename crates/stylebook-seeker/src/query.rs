//! Query: an AND-combination of clauses.

use crate::clause::{Clause, ClauseValue, Op};
use crate::value::Seekable;

/// A conjunction of [`Clause`]s.
///
/// An empty query matches every record.
#[derive(Debug, Clone, Default)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause, returning the updated query for chaining.
    pub fn and(mut self, field: &str, op: Op, value: ClauseValue) -> Self {
        self.clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an already-built clause.
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Returns the clauses in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns `true` if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns `true` if every clause matches `item`.
    pub fn matches<T: Seekable>(&self, item: &T) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.matches(item.seeker_field_value(&clause.field)))
    }

    /// Returns the matching items, preserving input order.
    pub fn filter<'a, T: Seekable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Counts the matching items.
    pub fn count<T: Seekable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }
}
