use super::template::{self, scaled};
use super::{Alignment, Generator, Platform};

const SIZE_POINTS: [u8; 7] = [8, 10, 12, 14, 18, 24, 36];

/// Simple Machines Forum 2.x
pub struct SmfGenerator;

impl Generator for SmfGenerator {
    fn platform(&self) -> Platform {
        Platform::Smf
    }

    fn size(&self, text: &str, level: u8) -> String {
        format!("[size={}pt]{text}[/size]", scaled(&SIZE_POINTS, level))
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        template::align_tag(text, alignment)
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote author={author}]{text}[/quote]"),
            None => format!("[quote]{text}[/quote]"),
        }
    }

    // SMF has no [th]
    fn table(&self, rows: &[Vec<String>]) -> String {
        template::bbcode_table(rows, |cell| format!("[td]{}[/td]", self.bold(cell)))
    }
}
