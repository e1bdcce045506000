//! Item name reconstruction from the lines around a price row.

use super::lines::RawLine;
use super::rules::patterns::{COLUMN_GAP, NOISE_KEYWORDS};

/// Previous, current and next line joined by single spaces.
///
/// Missing neighbours contribute an empty string, so the separators stay.
pub fn context_window(lines: &[RawLine<'_>], index: usize) -> String {
    let previous = previous_text(lines, index);
    let current = lines.get(index).map_or("", |line| line.text);
    let next = lines.get(index + 1).map_or("", |line| line.text);

    [previous, current, next].join(" ")
}

fn previous_text<'a>(lines: &[RawLine<'a>], index: usize) -> &'a str {
    index
        .checked_sub(1)
        .and_then(|i| lines.get(i))
        .map_or("", |line| line.text)
}

/// Rebuild the display name for the candidate at `index`.
///
/// `unit_start` is the byte offset of the candidate's pack size within its
/// own line. The window is cut at the first noise keyword or at that pack
/// size, then at the first column gap (two or more whitespace characters).
/// Pack sizes on the neighbouring lines do not end the name. The result may
/// be empty; callers still emit the record.
pub fn resolve_item_name(lines: &[RawLine<'_>], index: usize, unit_start: usize) -> String {
    let window = context_window(lines, index);
    let unit_offset = previous_text(lines, index).len() + 1 + unit_start;

    strip_noise(&window, Some(unit_offset))
}

/// Apply the truncation steps to an already built window.
///
/// `unit_offset` is where the candidate's pack size starts in `window`, if known.
pub fn strip_noise(window: &str, unit_offset: Option<usize>) -> String {
    let cut = NOISE_KEYWORDS
        .find(window)
        .map(|m| m.start())
        .into_iter()
        .chain(unit_offset)
        .min()
        .unwrap_or(window.len());

    let head = window.get(..cut).unwrap_or(window).trim();
    let first_column = COLUMN_GAP.split(head).next().unwrap_or("");

    first_column.trim().to_string()
}
