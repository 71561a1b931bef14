use super::template;
use super::{Alignment, Generator, Platform};
use crate::validate;

/// Invision Community (IP.Board)
pub struct IpbGenerator;

impl Generator for IpbGenerator {
    fn platform(&self) -> Platform {
        Platform::Ipb
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        template::align_tag(text, alignment)
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!("[media]{}[/media]", template::youtube_watch_url(id)),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote name=\"{author}\"]{text}[/quote]"),
            None => format!("[quote]{text}[/quote]"),
        }
    }

    fn code(&self, text: &str, _language: Option<&str>) -> String {
        format!("[code]{text}[/code]")
    }

    fn spoiler(&self, text: &str, _title: Option<&str>) -> String {
        format!("[spoiler]{text}[/spoiler]")
    }

    fn table(&self, rows: &[Vec<String>]) -> String {
        let table = template::monospace_table(rows);
        if table.is_empty() {
            return table;
        }
        self.code(&table, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_name_attribute() {
        assert_eq!(
            IpbGenerator.quote("hello", Some("Ana")),
            "[quote name=\"Ana\"]hello[/quote]"
        );
    }

    #[test]
    fn test_media_embed() {
        assert_eq!(
            IpbGenerator.youtube("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            "[media]https://www.youtube.com/watch?v=dQw4w9WgXcQ[/media]"
        );
    }

    #[test]
    fn test_language_and_title_dropped() {
        assert_eq!(IpbGenerator.code("x", Some("rust")), "[code]x[/code]");
        assert_eq!(IpbGenerator.spoiler("x", Some("t")), "[spoiler]x[/spoiler]");
    }

    #[test]
    fn test_unknown_video_falls_back_to_link() {
        assert_eq!(
            IpbGenerator.youtube("https://example.com/v"),
            "[url]https://example.com/v[/url]"
        );
    }
}
