//! Width-aware text helpers for table-like template output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to `max_width` terminal columns, ending in `…` when cut.
///
/// ```
/// use stylebook_cli::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Heading", 10), "Heading");
/// assert_eq!(truncate_to_width("Heading/Display", 8), "Heading…");
/// ```
pub fn truncate_to_width(text: &str, columns: usize) -> String {
    if text.width() <= columns {
        return text.to_string();
    }
    if columns == 0 {
        return String::new();
    }

    // One column is reserved for the ellipsis.
    let budget = columns - 1;
    let mut used = 0;
    let mut kept: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    kept.push('…');
    kept
}

/// Truncates or right-pads to exactly `width` columns.
pub fn pad_right(text: &str, columns: usize) -> String {
    let cell = truncate_to_width(text, columns);
    let fill = columns.saturating_sub(cell.width());
    format!("{cell}{:fill$}", "")
}
