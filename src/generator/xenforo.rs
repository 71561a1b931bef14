use super::template;
use super::{Alignment, Generator, Platform};
use crate::validate;

/// XenForo 2.x
pub struct XenforoGenerator;

impl Generator for XenforoGenerator {
    fn platform(&self) -> Platform {
        Platform::Xenforo
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        template::align_tag(text, alignment)
    }

    fn image(&self, src: &str, alt: Option<&str>) -> String {
        match alt {
            Some(alt) => format!("[img alt=\"{alt}\"]{src}[/img]"),
            None => format!("[img]{src}[/img]"),
        }
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!("[media=youtube]{id}[/media]"),
            None => self.url(input, None),
        }
    }

    fn inline_code(&self, text: &str) -> String {
        format!("[icode]{text}[/icode]")
    }

    fn spoiler(&self, text: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("[spoiler=\"{title}\"]{text}[/spoiler]"),
            None => format!("[spoiler]{text}[/spoiler]"),
        }
    }
}
