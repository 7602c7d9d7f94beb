//! Parsing clause operands from text.
//!
//! Filters are usually typed by people: a pattern box, a size field, a
//! line-height field. This module turns that text into typed
//! [`ClauseValue`]s and reports what could not be understood as a
//! [`ParseError`]. Nothing here panics on bad input.
//!
//! # Examples
//!
//! ```
//! use stylebook_seeker::{parse_value, ClauseValue, Op, SeekerSchema, SeekType};
//!
//! struct Face;
//!
//! impl SeekerSchema for Face {
//!     fn field_type(field: &str) -> Option<SeekType> {
//!         match field {
//!             "name" => Some(SeekType::String),
//!             "size" => Some(SeekType::Number),
//!             _ => None,
//!         }
//!     }
//!     fn field_names() -> &'static [&'static str] {
//!         &["name", "size"]
//!     }
//! }
//!
//! let size = parse_value::<Face>("size", Op::Eq, " 16 ").unwrap();
//! assert!(matches!(size, ClauseValue::Number(n) if n == 16.0));
//!
//! assert!(parse_value::<Face>("name", Op::Regex, "(unclosed").is_err());
//! ```

use regex::{Regex, RegexBuilder};

use crate::clause::{ClauseValue, Op};
use crate::schema::{SeekType, SeekerSchema};

/// Error from parsing a clause operand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Field name not found in schema.
    #[error("unknown field '{field}'. Available: {}", .available.join(", "))]
    UnknownField {
        field: String,
        available: Vec<String>,
    },
    /// Operator not valid for field type.
    #[error("operator '{operator}' is not valid for {field_type} field '{field}'")]
    InvalidOperator {
        field: String,
        operator: Op,
        field_type: SeekType,
    },
    /// Value could not be parsed for field type.
    #[error("invalid value '{value}' for {expected} field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        expected: SeekType,
        reason: String,
    },
    /// Invalid regex pattern.
    #[error("invalid regex '{pattern}' for field '{field}': {error}")]
    InvalidRegex {
        field: String,
        pattern: String,
        error: String,
    },
}

impl ParseError {
    /// Returns the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ParseError::UnknownField { field, .. }
            | ParseError::InvalidOperator { field, .. }
            | ParseError::InvalidValue { field, .. }
            | ParseError::InvalidRegex { field, .. } => field,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Compiles a case-insensitive pattern.
///
/// The pattern is a regular expression; plain text works as a substring
/// match.
pub fn compile_pattern(field: &str, pattern: &str) -> ParseResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ParseError::InvalidRegex {
            field: field.to_string(),
            pattern: pattern.to_string(),
            error: e.to_string(),
        })
}

/// Parses a number from user text.
///
/// Surrounding whitespace is ignored. Empty text, text that is not a
/// number and NaN are rejected.
pub fn parse_number(field: &str, value: &str) -> ParseResult<f64> {
    let invalid = |reason: &str| ParseError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: SeekType::Number,
        reason: reason.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty value"));
    }

    match trimmed.parse::<f64>() {
        Ok(n) if n.is_nan() => Err(invalid("not a number")),
        Ok(n) => Ok(n),
        Err(_) => Err(invalid("expected integer or decimal number")),
    }
}

/// Rounds `value` to `digits` significant digits.
///
/// Zero, non-finite and subnormal values and `digits == 0` are returned
/// unchanged.
///
/// ```
/// use stylebook_seeker::round_significant;
///
/// assert_eq!(round_significant(123.456, 3), 123.0);
/// assert_eq!(round_significant(1.23456, 3), 1.23);
/// assert_eq!(round_significant(123456.0, 3), 123000.0);
/// ```
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let exponent = digits as i32 - 1 - magnitude;
    // Dividing by an exact power of ten avoids the error of multiplying by
    // an inexact negative power.
    if exponent >= 0 {
        let factor = 10f64.powi(exponent);
        // Subnormal inputs need a factor beyond f64 range.
        if !factor.is_finite() {
            return value;
        }
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-exponent);
        (value / factor).round() * factor
    }
}

/// Parses a text operand into a [`ClauseValue`] for `field`.
///
/// # Arguments
///
/// * `field` - The field name, looked up in the schema
/// * `op` - The operator the clause will use
/// * `value` - The raw text
///
/// # Errors
///
/// - [`ParseError::UnknownField`] if the schema does not know the field
/// - [`ParseError::InvalidOperator`] if `op` does not apply to the field type
/// - [`ParseError::InvalidRegex`] for malformed patterns
/// - [`ParseError::InvalidValue`] for numbers or measures that don't parse
pub fn parse_value<S: SeekerSchema>(field: &str, op: Op, value: &str) -> ParseResult<ClauseValue> {
    let field_type = S::field_type(field).ok_or_else(|| ParseError::UnknownField {
        field: field.to_string(),
        available: S::field_names().iter().map(|s| s.to_string()).collect(),
    })?;

    if !field_type.is_valid_operator(op) {
        return Err(ParseError::InvalidOperator {
            field: field.to_string(),
            operator: op,
            field_type,
        });
    }

    match field_type {
        SeekType::String => {
            if op == Op::Regex {
                compile_pattern(field, value).map(ClauseValue::Regex)
            } else {
                Ok(ClauseValue::String(value.to_string()))
            }
        }
        SeekType::Number => parse_number(field, value).map(ClauseValue::Number),
        SeekType::Measure => S::resolve_measure(field, value)
            .map(ClauseValue::Measure)
            .ok_or_else(|| ParseError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                expected: SeekType::Measure,
                reason: "unrecognized measure".to_string(),
            }),
    }
}
