//! Shared helpers for the platform templates: size scales, list counters,
//! table layout and the progress bar.

use unicode_width::UnicodeWidthStr;

use super::{Alignment, ListStyle};

/// Number of cells in a rendered progress bar
pub const PROGRESS_CELLS: usize = 20;

/// Width of the drawn rule used where a platform has no native one
const RULE_WIDTH: usize = 20;

pub fn clamp_size(level: u8) -> u8 {
    level.clamp(1, 7)
}

pub fn clamp_header(level: u8) -> u8 {
    level.clamp(1, 6)
}

/// Relative size used to emulate a heading on platforms without headings
pub fn header_size(level: u8) -> u8 {
    (7 - clamp_header(level)).max(3)
}

/// Look up a size level (1..=7) in a platform's seven-step scale
pub fn scaled<T: Copy>(scale: &[T; 7], level: u8) -> T {
    scale[usize::from(clamp_size(level)) - 1]
}

/// `[center]text[/center]` style alignment used by boards without `[align=]`
pub fn align_tag(text: &str, alignment: Alignment) -> String {
    let tag = alignment.as_str();
    format!("[{tag}]{text}[/{tag}]")
}

pub fn youtube_watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

pub fn rule_line() -> String {
    "\u{2500}".repeat(RULE_WIDTH)
}

/// Spreadsheet-style lowercase counter: 1 -> a, 26 -> z, 27 -> aa
pub fn letter_marker(index: usize) -> String {
    let mut n = index;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Marker for the 1-based `index`th item of a plain-text list
pub fn list_marker(style: ListStyle, index: usize, bullet: &str) -> String {
    match style {
        ListStyle::Bullet => bullet.to_string(),
        ListStyle::Numbered => format!("{index}."),
        ListStyle::Lettered => format!("{}.", letter_marker(index)),
    }
}

/// Clamp to 0..=100; NaN counts as zero
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// `label [██████░░░░░░░░░░░░░░] 30%`
pub fn progress_line(percent: f64, label: Option<&str>) -> String {
    let pct = clamp_percent(percent);
    let filled = ((pct / 100.0) * PROGRESS_CELLS as f64).round() as usize;
    let filled = filled.min(PROGRESS_CELLS);
    let bar = format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(PROGRESS_CELLS - filled)
    );
    let shown = pct.round() as u8;
    match label {
        Some(label) if !label.is_empty() => format!("{label} [{bar}] {shown}%"),
        _ => format!("[{bar}] {shown}%"),
    }
}

/// Pad ragged rows with empty cells so every row has the same width
pub fn normalize_rows(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            row.resize(columns, String::new());
            row
        })
        .collect()
}

/// `[table]` markup; the first row goes through `header_cell`
pub fn bbcode_table<F>(rows: &[Vec<String>], header_cell: F) -> String
where
    F: Fn(&str) -> String,
{
    let rows = normalize_rows(rows);
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::from("[table]");
    for (i, row) in rows.iter().enumerate() {
        out.push_str("\n[tr]");
        for cell in row {
            if i == 0 {
                out.push_str(&header_cell(cell));
            } else {
                out.push_str("[td]");
                out.push_str(cell);
                out.push_str("[/td]");
            }
        }
        out.push_str("[/tr]");
    }
    out.push_str("\n[/table]");
    out
}

/// Plain-text table padded for monospace rendering:
///
/// ```text
/// Name  | Qty
/// ------+----
/// Apple | 3
/// ```
pub fn monospace_table(rows: &[Vec<String>]) -> String {
    let rows = normalize_rows(rows);
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut widths = vec![0usize; first.len()];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let render_row = |row: &Vec<String>| -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell}{}", " ".repeat(w - cell.width())))
            .collect();
        cells.join(" | ").trim_end().to_string()
    };

    let separator = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(first));
    lines.push(separator);
    lines.extend(rows.iter().skip(1).map(render_row));
    lines.join("\n")
}
