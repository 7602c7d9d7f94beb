//! Field typing for clauses built from user text.
//!
//! A [`SeekerSchema`] tells [`parse_value`](crate::parse_value) which fields
//! a record type exposes and what kind of operand each one takes. Code that
//! constructs [`ClauseValue`](crate::ClauseValue)s by hand can skip it.

use crate::Op;

/// Kind of operand a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekType {
    /// Free text; compared exactly or by pattern.
    String,
    /// Plain number; compared exactly.
    Number,
    /// Number with a unit; compared after rounding.
    Measure,
}

impl SeekType {
    /// Operator used when the caller does not pick one. Always `Eq`.
    pub fn default_operator(self) -> Op {
        Op::Eq
    }

    /// Whether `op` can be applied to fields of this kind.
    ///
    /// Only text fields accept [`Op::Regex`].
    pub fn is_valid_operator(self, op: Op) -> bool {
        op == Op::Eq || (self == SeekType::String && op == Op::Regex)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeekType::String => "string",
            SeekType::Number => "number",
            SeekType::Measure => "measure",
        }
    }
}

impl std::fmt::Display for SeekType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static field metadata for a record type.
///
/// ```
/// use stylebook_seeker::{Measure, SeekerSchema, SeekType};
///
/// struct Face;
///
/// impl SeekerSchema for Face {
///     fn field_type(field: &str) -> Option<SeekType> {
///         Some(match field {
///             "family" => SeekType::String,
///             "size" => SeekType::Number,
///             "tracking" => SeekType::Measure,
///             _ => return None,
///         })
///     }
///
///     fn field_names() -> &'static [&'static str] {
///         &["family", "size", "tracking"]
///     }
///
///     fn resolve_measure(_field: &str, raw: &str) -> Option<Measure> {
///         let number = raw.strip_suffix("em")?.parse().ok()?;
///         Some(Measure::new("EM", number))
///     }
/// }
///
/// assert_eq!(Face::field_type("size"), Some(SeekType::Number));
/// assert_eq!(Face::resolve_measure("tracking", "0.5em"), Some(Measure::new("EM", 0.5)));
/// ```
pub trait SeekerSchema {
    /// Kind of `field`, or `None` when the record has no such field.
    fn field_type(field: &str) -> Option<SeekType>;

    /// Every field a query may name. Listed in unknown-field errors.
    fn field_names() -> &'static [&'static str];

    /// Reads the text form of a measure field.
    ///
    /// Units are domain specific, so each schema brings its own grammar.
    /// Recognizes nothing unless overridden.
    fn resolve_measure(_field: &str, _raw: &str) -> Option<crate::Measure> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Measure;

    struct Row;

    impl SeekerSchema for Row {
        fn field_type(field: &str) -> Option<SeekType> {
            match field {
                "label" => Some(SeekType::String),
                "weight" => Some(SeekType::Number),
                _ => None,
            }
        }

        fn field_names() -> &'static [&'static str] {
            &["label", "weight"]
        }
    }

    #[test]
    fn test_every_kind_defaults_to_eq() {
        for kind in [SeekType::String, SeekType::Number, SeekType::Measure] {
            assert_eq!(kind.default_operator(), Op::Eq);
            assert!(kind.is_valid_operator(Op::Eq));
        }
    }

    #[test]
    fn test_regex_is_text_only() {
        assert!(SeekType::String.is_valid_operator(Op::Regex));
        assert!(!SeekType::Number.is_valid_operator(Op::Regex));
        assert!(!SeekType::Measure.is_valid_operator(Op::Regex));
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<String> = [SeekType::String, SeekType::Number, SeekType::Measure]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["string", "number", "measure"]);
    }

    #[test]
    fn test_lookup_and_default_measure() {
        assert_eq!(Row::field_type("weight"), Some(SeekType::Number));
        assert_eq!(Row::field_type("color"), None);
        assert_eq!(Row::resolve_measure("weight", "12px"), None::<Measure>);
    }
}
