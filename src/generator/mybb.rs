use super::template::{self, scaled};
use super::{Generator, Platform};
use crate::validate;

const SIZE_NAMES: [&str; 7] = [
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large",
];

/// MyBB 1.8
pub struct MybbGenerator;

impl Generator for MybbGenerator {
    fn platform(&self) -> Platform {
        Platform::Mybb
    }

    fn size(&self, text: &str, level: u8) -> String {
        format!("[size={}]{text}[/size]", scaled(&SIZE_NAMES, level))
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!("[video=youtube]{}[/video]", template::youtube_watch_url(id)),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote='{author}']{text}[/quote]"),
            None => format!("[quote]{text}[/quote]"),
        }
    }

    fn code(&self, text: &str, language: Option<&str>) -> String {
        match language {
            Some(lang) if lang.eq_ignore_ascii_case("php") => format!("[php]{text}[/php]"),
            _ => format!("[code]{text}[/code]"),
        }
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
    fn test_size_names() {
        assert_eq!(MybbGenerator.size("x", 1), "[size=xx-small]x[/size]");
        assert_eq!(MybbGenerator.size("x", 4), "[size=medium]x[/size]");
        assert_eq!(MybbGenerator.header("Top", 1), "[size=x-large][b]Top[/b][/size]");
    }

    #[test]
    fn test_quote_author_single_quoted() {
        assert_eq!(MybbGenerator.quote("hi", Some("Lee")), "[quote='Lee']hi[/quote]");
    }

    #[test]
    fn test_video_tag() {
        assert_eq!(
            MybbGenerator.youtube("youtu.be/dQw4w9WgXcQ"),
            "[video=youtube]https://www.youtube.com/watch?v=dQw4w9WgXcQ[/video]"
        );
    }

    #[test]
    fn test_code_ignores_non_php_language() {
        assert_eq!(MybbGenerator.code("echo 1;", Some("php")), "[php]echo 1;[/php]");
        assert_eq!(MybbGenerator.code("x", Some("go")), "[code]x[/code]");
    }

    #[test]
    fn test_table_is_monospace_code() {
        let rows = vec![vec!["a".to_string()], vec!["b".to_string()]];
        assert_eq!(MybbGenerator.table(&rows), "[code]a\n-\nb[/code]");
    }
}
