use super::template;
use super::{Alignment, Generator, Platform};
use crate::validate;

/// vBulletin 4/5
pub struct VbulletinGenerator;

impl Generator for VbulletinGenerator {
    fn platform(&self) -> Platform {
        Platform::Vbulletin
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        template::align_tag(text, alignment)
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!(
                "[video=youtube;{id}]{}[/video]",
                template::youtube_watch_url(id)
            ),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote={author}]{text}[/quote]"),
            None => format!("[quote]{text}[/quote]"),
        }
    }

    // Highlighted [php] and [html] blocks; everything else is plain [code]
    fn code(&self, text: &str, language: Option<&str>) -> String {
        match language.map(str::to_ascii_lowercase).as_deref() {
            Some("php") => format!("[php]{text}[/php]"),
            Some("html") => format!("[html]{text}[/html]"),
            _ => format!("[code]{text}[/code]"),
        }
    }

    fn mention(&self, user: &str) -> String {
        format!("[mention]{user}[/mention]")
    }
}
