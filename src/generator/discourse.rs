use super::markdown;
use super::template;
use super::{Alignment, Generator, ListStyle, Platform};
use crate::validate;

/// Discourse: CommonMark plus the bundled BBCode and spoiler plugins
pub struct DiscourseGenerator;

impl Generator for DiscourseGenerator {
    fn platform(&self) -> Platform {
        Platform::Discourse
    }

    fn bold(&self, text: &str) -> String {
        format!("**{text}**")
    }

    fn italic(&self, text: &str) -> String {
        format!("*{text}*")
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("~~{text}~~")
    }

    fn color(&self, text: &str, _color: &str) -> String {
        text.to_string()
    }

    fn size(&self, text: &str, _level: u8) -> String {
        text.to_string()
    }

    fn font(&self, text: &str, _family: &str) -> String {
        text.to_string()
    }

    fn align(&self, text: &str, _alignment: Alignment) -> String {
        text.to_string()
    }

    fn url(&self, href: &str, label: Option<&str>) -> String {
        match label {
            Some(label) => format!("[{label}]({href})"),
            None => href.to_string(),
        }
    }

    fn email(&self, address: &str, label: Option<&str>) -> String {
        let label = label.unwrap_or(address);
        format!("[{label}](mailto:{address})")
    }

    fn image(&self, src: &str, alt: Option<&str>) -> String {
        format!("![{}]({src})", alt.unwrap_or(""))
    }

    // A bare link on its own line is oneboxed into a player
    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => template::youtube_watch_url(id),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote=\"{author}\"]\n{text}\n[/quote]"),
            None => markdown::quote_lines(text),
        }
    }

    fn code(&self, text: &str, language: Option<&str>) -> String {
        markdown::fenced(text, language)
    }

    fn inline_code(&self, text: &str) -> String {
        markdown::code_span(text)
    }

    fn spoiler(&self, text: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("[details=\"{title}\"]\n{text}\n[/details]"),
            None => format!("[spoiler]{text}[/spoiler]"),
        }
    }

    fn list(&self, items: &[String], style: ListStyle) -> String {
        markdown::list(items, style, "-")
    }

    fn table(&self, rows: &[Vec<String>]) -> String {
        markdown::pipe_table(rows)
    }

    fn header(&self, text: &str, level: u8) -> String {
        markdown::header(text, level)
    }

    fn horizontal_rule(&self) -> String {
        "---".to_string()
    }

    fn superscript(&self, text: &str) -> String {
        format!("<sup>{text}</sup>")
    }

    fn subscript(&self, text: &str) -> String {
        format!("<sub>{text}</sub>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DiscourseGenerator.bold("hi"), "**hi**")]
    #[case(DiscourseGenerator.italic("hi"), "*hi*")]
    #[case(DiscourseGenerator.underline("hi"), "[u]hi[/u]")]
    #[case(DiscourseGenerator.strikethrough("hi"), "~~hi~~")]
    #[case(DiscourseGenerator.color("hi", "red"), "hi")]
    #[case(DiscourseGenerator.size("hi", 7), "hi")]
    #[case(DiscourseGenerator.font("hi", "Arial"), "hi")]
    #[case(DiscourseGenerator.align("hi", Alignment::Center), "hi")]
    #[case(DiscourseGenerator.url("https://a.io", Some("A")), "[A](https://a.io)")]
    #[case(DiscourseGenerator.url("https://a.io", None), "https://a.io")]
    #[case(DiscourseGenerator.email("me@a.io", None), "[me@a.io](mailto:me@a.io)")]
    #[case(DiscourseGenerator.image("p.png", None), "![](p.png)")]
    #[case(DiscourseGenerator.image("p.png", Some("cat")), "![cat](p.png)")]
    #[case(DiscourseGenerator.youtube("youtu.be/dQw4w9WgXcQ"), "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    #[case(DiscourseGenerator.quote("a\nb", None), "> a\n> b")]
    #[case(DiscourseGenerator.quote("a", Some("Jo")), "[quote=\"Jo\"]\na\n[/quote]")]
    #[case(DiscourseGenerator.code("x", Some("rb")), "```rb\nx\n```")]
    #[case(DiscourseGenerator.inline_code("x"), "`x`")]
    #[case(DiscourseGenerator.spoiler("x", None), "[spoiler]x[/spoiler]")]
    #[case(DiscourseGenerator.spoiler("x", Some("More")), "[details=\"More\"]\nx\n[/details]")]
    #[case(DiscourseGenerator.header("T", 3), "### T")]
    #[case(DiscourseGenerator.horizontal_rule(), "---")]
    #[case(DiscourseGenerator.superscript("2"), "<sup>2</sup>")]
    #[case(DiscourseGenerator.subscript("2"), "<sub>2</sub>")]
    #[case(DiscourseGenerator.mention("jo"), "@jo")]
    #[case(DiscourseGenerator.progress_bar(50.0, None), "`[██████████░░░░░░░░░░] 50%`")]
    fn test_templates(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_lettered_list() {
        let items = vec!["x".to_string(), "y".to_string()];
        assert_eq!(DiscourseGenerator.list(&items, ListStyle::Lettered), "a. x\nb. y");
    }

    #[test]
    fn test_pipe_table() {
        let rows = vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ];
        assert_eq!(
            DiscourseGenerator.table(&rows),
            "| A | B |\n| --- | --- |\n| 1 | 2 |"
        );
    }
}
