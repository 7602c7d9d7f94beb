//! Free-text line-height grammar.
//!
//! Used both for the line-height search box and for bulk-edit entry:
//!
//! | Input (after normalization) | Result |
//! |-----------------------------|--------|
//! | `auto` | [`LineHeight::Auto`] |
//! | `<number>px` | [`LineHeight::Pixels`] |
//! | `<number>%` | [`LineHeight::Percent`] |
//! | anything else | `None` |
//!
//! Normalization trims, lower-cases and removes all inner whitespace, so
//! `" 24 PX "` reads as `24px`. `None` means "no value"; callers ignore it
//! rather than report an error.

use stylebook_seeker::parse_number;

use crate::model::{LineHeight, StyleRecord};

/// Parses a line-height token.
///
/// ```
/// use stylebook::{parse_line_height, LineHeight};
///
/// assert_eq!(parse_line_height("150%"), Some(LineHeight::percent(150.0)));
/// assert_eq!(parse_line_height("24px"), Some(LineHeight::pixels(24.0)));
/// assert_eq!(parse_line_height("auto"), Some(LineHeight::Auto));
/// assert_eq!(parse_line_height("garbage"), None);
/// ```
pub fn parse_line_height(input: &str) -> Option<LineHeight> {
    let token: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if token == "auto" {
        return Some(LineHeight::Auto);
    }
    if let Some(amount) = token.strip_suffix("px") {
        return parse_amount(amount).map(LineHeight::pixels);
    }
    if let Some(amount) = token.strip_suffix('%') {
        return parse_amount(amount).map(LineHeight::percent);
    }
    None
}

fn parse_amount(amount: &str) -> Option<f64> {
    parse_number(StyleRecord::LINE_HEIGHT, amount)
        .ok()
        .filter(|value| value.is_finite())
}
