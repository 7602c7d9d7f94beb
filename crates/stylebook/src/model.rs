//! Text style records and their value types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use stylebook_seeker::{Measure, SeekType, Seekable, SeekerSchema, Value};

use crate::line_height::parse_line_height;

/// A font face key: family plus style (weight/slant name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Line height of a text style.
///
/// Serialized as `{"unit":"AUTO"}`, `{"unit":"PIXELS","value":24}` or
/// `{"unit":"PERCENT","value":150}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "UPPERCASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels { value: f64 },
    Percent { value: f64 },
}

impl LineHeight {
    pub fn pixels(value: f64) -> Self {
        LineHeight::Pixels { value }
    }

    pub fn percent(value: f64) -> Self {
        LineHeight::Percent { value }
    }

    /// The unit tag as stored in documents.
    pub fn unit(&self) -> &'static str {
        match self {
            LineHeight::Auto => "AUTO",
            LineHeight::Pixels { .. } => "PIXELS",
            LineHeight::Percent { .. } => "PERCENT",
        }
    }

    /// The numeric part, absent for `Auto`.
    pub fn value(&self) -> Option<f64> {
        match self {
            LineHeight::Auto => None,
            LineHeight::Pixels { value } | LineHeight::Percent { value } => Some(*value),
        }
    }

    pub(crate) fn to_measure(self) -> Measure {
        match self.value() {
            Some(value) => Measure::new(self.unit(), value),
            None => Measure::unit_only(self.unit()),
        }
    }
}

/// Formats in the same text form [`parse_line_height`] accepts.
impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Auto => write!(f, "auto"),
            LineHeight::Pixels { value } => write!(f, "{}px", value),
            LineHeight::Percent { value } => write!(f, "{}%", value),
        }
    }
}

/// A style property that can be bound to a document variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableField {
    FontFamily,
    FontStyle,
    FontSize,
    LineHeight,
}

impl VariableField {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableField::FontFamily => "fontFamily",
            VariableField::FontStyle => "fontStyle",
            VariableField::FontSize => "fontSize",
            VariableField::LineHeight => "lineHeight",
        }
    }
}

impl fmt::Display for VariableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text style of the document.
///
/// `name` may carry a group path: `"Heading/H1"` has group `"Heading"` and
/// simple name `"H1"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub id: String,
    pub name: String,
    pub font_name: FontName,
    pub font_size: f64,
    #[serde(default)]
    pub line_height: LineHeight,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bound_variables: BTreeMap<VariableField, String>,
}

impl StyleRecord {
    /// Field name for the group path.
    pub const GROUP: &'static str = "group";
    /// Field name for the simple name.
    pub const NAME: &'static str = "name";
    pub const FAMILY: &'static str = "family";
    pub const STYLE: &'static str = "style";
    pub const SIZE: &'static str = "size";
    pub const LINE_HEIGHT: &'static str = "line-height";

    /// Creates a record with `auto` line height and no description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        font_name: FontName,
        font_size: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            font_name,
            font_size,
            line_height: LineHeight::Auto,
            description: String::new(),
            bound_variables: BTreeMap::new(),
        }
    }

    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn group_path(&self) -> &str {
        group_path(&self.name)
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

/// Substring of `name` before the last `/`, or `""` if there is none.
///
/// ```
/// use stylebook::group_path;
///
/// assert_eq!(group_path("Heading/Large/H1"), "Heading/Large");
/// assert_eq!(group_path("Body"), "");
/// ```
pub fn group_path(name: &str) -> &str {
    name.rfind('/').map_or("", |i| &name[..i])
}

/// Substring of `name` after the last `/`, or all of `name`.
///
/// ```
/// use stylebook::simple_name;
///
/// assert_eq!(simple_name("Heading/Large/H1"), "H1");
/// assert_eq!(simple_name("Body"), "Body");
/// ```
pub fn simple_name(name: &str) -> &str {
    name.rfind('/').map_or(name, |i| &name[i + 1..])
}

impl Seekable for StyleRecord {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            Self::GROUP => Value::String(self.group_path()),
            Self::NAME => Value::String(self.simple_name()),
            Self::FAMILY => Value::String(&self.font_name.family),
            Self::STYLE => Value::String(&self.font_name.style),
            Self::SIZE => Value::Number(self.font_size),
            Self::LINE_HEIGHT => Value::Measure {
                unit: self.line_height.unit(),
                value: self.line_height.value(),
            },
            _ => Value::None,
        }
    }
}

impl SeekerSchema for StyleRecord {
    fn field_type(field: &str) -> Option<SeekType> {
        match field {
            Self::GROUP | Self::NAME | Self::FAMILY | Self::STYLE => Some(SeekType::String),
            Self::SIZE => Some(SeekType::Number),
            Self::LINE_HEIGHT => Some(SeekType::Measure),
            _ => None,
        }
    }

    fn field_names() -> &'static [&'static str] {
        &[
            Self::GROUP,
            Self::NAME,
            Self::FAMILY,
            Self::STYLE,
            Self::SIZE,
            Self::LINE_HEIGHT,
        ]
    }

    fn resolve_measure(field: &str, raw: &str) -> Option<Measure> {
        match field {
            Self::LINE_HEIGHT => parse_line_height(raw).map(LineHeight::to_measure),
            _ => None,
        }
    }
}
