use super::template::{self, scaled};
use super::{Generator, Platform};
use crate::validate;

/// phpBB 3.x sizes are percentages
const SIZE_PERCENT: [u16; 7] = [50, 85, 100, 120, 150, 175, 200];

/// phpBB 3.x
///
/// No stock table or rule tags, so both are drawn as text. Video embeds go
/// through the `[media]` tag of the media-embed extension.
pub struct PhpbbGenerator;

impl Generator for PhpbbGenerator {
    fn platform(&self) -> Platform {
        Platform::Phpbb
    }

    fn size(&self, text: &str, level: u8) -> String {
        format!("[size={}]{text}[/size]", scaled(&SIZE_PERCENT, level))
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!("[media]{}[/media]", template::youtube_watch_url(id)),
            None => self.url(input, None),
        }
    }

    fn table(&self, rows: &[Vec<String>]) -> String {
        let table = template::monospace_table(rows);
        if table.is_empty() {
            return table;
        }
        self.code(&table, None)
    }

    fn horizontal_rule(&self) -> String {
        template::rule_line()
    }
}
