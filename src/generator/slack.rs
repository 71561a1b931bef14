use regex::Regex;
use std::sync::LazyLock;

use super::markdown;
use super::template;
use super::{Alignment, Generator, ListStyle, Platform};
use crate::validate;

static USER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[UW][A-Z0-9]{2,}$").unwrap());

/// Slack mrkdwn
pub struct SlackGenerator;

impl Generator for SlackGenerator {
    fn platform(&self) -> Platform {
        Platform::Slack
    }

    fn bold(&self, text: &str) -> String {
        format!("*{text}*")
    }

    fn italic(&self, text: &str) -> String {
        format!("_{text}_")
    }

    fn underline(&self, text: &str) -> String {
        text.to_string()
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("~{text}~")
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
            Some(label) => format!("<{href}|{label}>"),
            None => format!("<{href}>"),
        }
    }

    fn email(&self, address: &str, label: Option<&str>) -> String {
        let label = label.unwrap_or(address);
        format!("<mailto:{address}|{label}>")
    }

    fn image(&self, src: &str, alt: Option<&str>) -> String {
        self.url(src, alt)
    }

    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => self.url(&template::youtube_watch_url(id), None),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        let body = markdown::quote_lines(text);
        match author {
            Some(author) => format!("> _{author} wrote:_\n{body}"),
            None => body,
        }
    }

    // mrkdwn fences take no language
    fn code(&self, text: &str, _language: Option<&str>) -> String {
        markdown::fenced(text, None)
    }

    fn inline_code(&self, text: &str) -> String {
        markdown::code_span(text)
    }

    fn spoiler(&self, text: &str, _title: Option<&str>) -> String {
        text.to_string()
    }

    fn list(&self, items: &[String], style: ListStyle) -> String {
        markdown::list(items, style, "\u{2022}")
    }

    fn table(&self, rows: &[Vec<String>]) -> String {
        markdown::fenced_table(rows)
    }

    fn header(&self, text: &str, _level: u8) -> String {
        self.bold(text)
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
        if USER_ID_PATTERN.is_match(user) {
            format!("<@{user}>")
        } else {
            format!("@{user}")
        }
    }
}
