//! Building blocks shared by the Markdown-family profiles (Discourse,
//! Discord, Slack).

use super::template::{self, list_marker};
use super::ListStyle;

/// Length of the longest run of backticks in `text`
fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Prefix every line with `> `
pub fn quote_lines(text: &str) -> String {
    if text.is_empty() {
        return "> ".to_string();
    }
    text.lines()
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fenced code block; the fence grows past any backtick run in the body
pub fn fenced(text: &str, language: Option<&str>) -> String {
    let fence = "`".repeat((longest_backtick_run(text) + 1).max(3));
    let lang = language.unwrap_or("");
    format!("{fence}{lang}\n{text}\n{fence}")
}

/// Inline code span that survives backticks inside `text`
pub fn code_span(text: &str) -> String {
    let run = longest_backtick_run(text);
    if run == 0 {
        return format!("`{text}`");
    }
    let fence = "`".repeat(run + 1);
    format!("{fence} {text} {fence}")
}

/// One `marker item` line per entry
pub fn list(items: &[String], style: ListStyle, bullet: &str) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{} {item}", list_marker(style, i + 1, bullet)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn header(text: &str, level: u8) -> String {
    let hashes = "#".repeat(usize::from(template::clamp_header(level)));
    format!("{hashes} {text}")
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

/// GitHub-flavored pipe table; the first row is the header
pub fn pipe_table(rows: &[Vec<String>]) -> String {
    let rows = template::normalize_rows(rows);
    let Some(first) = rows.first() else {
        return String::new();
    };

    let render_row = |row: &Vec<String>| -> String {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        format!("| {} |", cells.join(" | "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(first));
    lines.push(format!("|{}", " --- |".repeat(first.len())));
    lines.extend(rows.iter().skip(1).map(render_row));
    lines.join("\n")
}

/// Monospace table wrapped in a fence, for chats without table support
pub fn fenced_table(rows: &[Vec<String>]) -> String {
    let table = template::monospace_table(rows);
    if table.is_empty() {
        return table;
    }
    fenced(&table, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quote_lines() {
        assert_eq!(quote_lines("one\n\ntwo"), "> one\n>\n> two");
        assert_eq!(quote_lines(""), "> ");
    }

    #[test]
    fn test_fence_grows_with_backticks() {
        assert_eq!(fenced("let x = 1;", Some("rust")), "```rust\nlet x = 1;\n```");
        assert_eq!(fenced("```\ninner\n```", None), "````\n```\ninner\n```\n````");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(code_span("ls -la"), "`ls -la`");
        assert_eq!(code_span("a`b"), "`` a`b ``");
    }

    #[test]
    fn test_list_styles() {
        let items = strings(&["x", "y"]);
        assert_eq!(list(&items, ListStyle::Bullet, "-"), "- x\n- y");
        assert_eq!(list(&items, ListStyle::Numbered, "-"), "1. x\n2. y");
        assert_eq!(list(&items, ListStyle::Lettered, "-"), "a. x\nb. y");
    }

    #[test]
    fn test_pipe_table_escapes() {
        let rows = vec![strings(&["Key", "Value"]), strings(&["a|b", "1"])];
        assert_eq!(
            pipe_table(&rows),
            "| Key | Value |\n| --- | --- |\n| a\\|b | 1 |"
        );
    }

    #[test]
    fn test_header_clamps() {
        assert_eq!(header("Top", 0), "# Top");
        assert_eq!(header("Deep", 9), "###### Deep");
    }
}
