//! Input checks used to warn about suspicious parameters before rendering.
//!
//! None of these reject input: the generators render whatever they are
//! given, and callers decide whether a failed check is worth reporting.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:https?|ftp)://[^\s/$.?#][^\s]*$").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static YOUTUBE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:^(?:https?://)?(?:(?:www\.|m\.)?youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#\s]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/))([A-Za-z0-9_-]{11})(?:[?&#/]|$)",
    )
    .unwrap()
});

static YOUTUBE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Color names most BBCode boards accept in `[color=...]`
const NAMED_COLORS: &[&str] = &[
    "black", "white", "red", "green", "blue", "yellow", "orange", "purple", "pink", "brown",
    "gray", "grey", "silver", "gold", "navy", "teal", "maroon", "olive", "lime", "aqua", "cyan",
    "magenta", "fuchsia", "indigo", "violet", "darkred", "darkblue", "darkgreen", "skyblue",
    "beige", "crimson", "coral", "salmon", "turquoise",
];

pub fn is_valid_url(input: &str) -> bool {
    URL_PATTERN.is_match(input.trim())
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input.trim())
}

/// `#rgb`, `#rrggbb` or a common color name
pub fn is_valid_color(input: &str) -> bool {
    let input = input.trim();
    HEX_COLOR_PATTERN.is_match(input)
        || NAMED_COLORS
            .iter()
            .any(|name| name.eq_ignore_ascii_case(input))
}

/// Extract the 11-character video ID from a YouTube URL or a bare ID.
///
/// A bare ID needs a digit or mixed case, so ordinary 11-letter words
/// such as `programming` are not taken for videos.
pub fn youtube_id(input: &str) -> Option<&str> {
    let input = input.trim();
    if YOUTUBE_ID_PATTERN.is_match(input) && looks_generated(input) {
        return Some(input);
    }
    YOUTUBE_URL_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn looks_generated(id: &str) -> bool {
    let has = |pred: fn(&u8) -> bool| id.bytes().any(|b| pred(&b));
    has(u8::is_ascii_digit) || (has(u8::is_ascii_uppercase) && has(u8::is_ascii_lowercase))
}
