use super::markdown;
use super::template;
use super::{Alignment, Generator, ListStyle, Platform};
use crate::validate;

/// Discord chat markdown
///
/// No tables, rules, colors or sizes. Links to images and videos are
/// embedded by the client, so they are emitted bare.
pub struct DiscordGenerator;

impl Generator for DiscordGenerator {
    fn platform(&self) -> Platform {
        Platform::Discord
    }

    fn bold(&self, text: &str) -> String {
        format!("**{text}**")
    }

    fn italic(&self, text: &str) -> String {
        format!("*{text}*")
    }

    fn underline(&self, text: &str) -> String {
        format!("__{text}__")
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
        match label {
            Some(label) => format!("{label} ({address})"),
            None => address.to_string(),
        }
    }

    fn image(&self, src: &str, _alt: Option<&str>) -> String {
        src.to_string()
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => template::youtube_watch_url(id),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        let body = markdown::quote_lines(text);
        match author {
            Some(author) => format!("> *{author} wrote:*\n{body}"),
            None => body,
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
            Some(title) => format!("{title}: ||{text}||"),
            None => format!("||{text}||"),
        }
    }

    fn list(&self, items: &[String], style: ListStyle) -> String {
        markdown::list(items, style, "-")
    }

    fn table(&self, rows: &[Vec<String>]) -> String {
        markdown::fenced_table(rows)
    }

    // Only three heading levels render
    fn header(&self, text: &str, level: u8) -> String {
        match template::clamp_header(level) {
            level @ 1..=3 => markdown::header(text, level),
            _ => self.bold(text),
        }
    }

    fn horizontal_rule(&self) -> String {
        template::rule_line()
    }

    fn superscript(&self, text: &str) -> String {
        text.to_string()
    }

    fn subscript(&self, text: &str) -> String {
        text.to_string()
    }

    fn mention(&self, user: &str) -> String {
        if !user.is_empty() && user.chars().all(|c| c.is_ascii_digit()) {
            format!("<@{user}>")
        } else {
            format!("@{user}")
        }
    }
}
