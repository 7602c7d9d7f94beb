//! Compiled clauses and their matching rules.

use regex::Regex;

use crate::parse::round_significant;
use crate::value::{Measure, Value};

/// Significant digits used when comparing the numeric part of measures.
///
/// Values typed into text fields round-trip through floats; comparing at
/// three significant digits keeps `24` and `24.0001` equal.
pub const MEASURE_PRECISION: u32 = 3;

/// Comparison operator of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exact equality (measures compare unit and rounded value).
    Eq,
    /// Regular expression test against a text field.
    Regex,
}

impl Op {
    /// Returns the operator's name as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Regex => "regex",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The typed operand of a clause.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    String(String),
    Number(f64),
    Measure(Measure),
    Regex(Regex),
    /// Matches no record. Stands in for operands that failed to compile.
    Nothing,
}

/// One field constraint inside a [`Query`](crate::Query).
#[derive(Debug, Clone)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a clause.
    pub fn new(field: impl Into<String>, op: Op, value: ClauseValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Creates a clause on `field` that rejects every record.
    pub fn nothing(field: impl Into<String>) -> Self {
        Self::new(field, Op::Eq, ClauseValue::Nothing)
    }

    /// Tests a field value against this clause.
    ///
    /// Mismatched value kinds never match.
    pub fn matches(&self, value: Value<'_>) -> bool {
        match (&self.op, &self.value, value) {
            (_, ClauseValue::Nothing, _) => false,
            (Op::Eq, ClauseValue::String(expected), Value::String(actual)) => {
                actual == expected.as_str()
            }
            (Op::Eq, ClauseValue::Number(expected), Value::Number(actual)) => actual == *expected,
            (Op::Eq, ClauseValue::Measure(expected), Value::Measure { unit, value }) => {
                expected.unit == unit && measure_values_match(expected.value, value)
            }
            (Op::Regex, ClauseValue::Regex(re), Value::String(actual)) => re.is_match(actual),
            _ => false,
        }
    }
}

fn measure_values_match(expected: Option<f64>, actual: Option<f64>) -> bool {
    match (expected, actual) {
        (None, None) => true,
        (Some(e), Some(a)) => {
            round_significant(e, MEASURE_PRECISION) == round_significant(a, MEASURE_PRECISION)
        }
        _ => false,
    }
}
