//! Field values exposed by seekable records.

/// A borrowed view of one field of a record.
///
/// Returned by [`Seekable::seeker_field_value`]. Fields that a record does
/// not know about report [`Value::None`], which no clause matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Text field.
    String(&'a str),
    /// Numeric field.
    Number(f64),
    /// A unit-tagged number, such as `24px` or `150%`.
    ///
    /// Unit-only values (like `auto`) carry `value: None`.
    Measure { unit: &'a str, value: Option<f64> },
    /// The field does not exist on this record.
    None,
}

/// An owned unit-tagged number used as a clause operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub unit: String,
    pub value: Option<f64>,
}

impl Measure {
    /// Creates a measure carrying a number.
    pub fn new(unit: impl Into<String>, value: f64) -> Self {
        Self {
            unit: unit.into(),
            value: Some(value),
        }
    }

    /// Creates a unit-only measure (no numeric part).
    pub fn unit_only(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            value: None,
        }
    }
}

/// Records that can be filtered by a [`Query`](crate::Query).
///
/// Implementations map a field name to a borrowed [`Value`].
///
/// ```
/// use stylebook_seeker::{Seekable, Value};
///
/// struct Face {
///     family: String,
/// }
///
/// impl Seekable for Face {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "family" => Value::String(&self.family),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of `field` for this record.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;
}
