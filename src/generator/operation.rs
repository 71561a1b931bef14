use serde::{Deserialize, Serialize};

use super::{Alignment, Generator, ListStyle};
use crate::validate;

/// One formatting request: the operation name plus its parameters.
///
/// Serialized with an `op` tag, e.g. `{"op": "quote", "text": "hi", "author": "Ann"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Bold {
        text: String,
    },
    Italic {
        text: String,
    },
    Underline {
        text: String,
    },
    #[serde(alias = "strike")]
    Strikethrough {
        text: String,
    },
    Color {
        text: String,
        color: String,
    },
    Size {
        text: String,
        level: u8,
    },
    Font {
        text: String,
        family: String,
    },
    Align {
        text: String,
        #[serde(default)]
        alignment: Alignment,
    },
    Url {
        href: String,
        #[serde(default)]
        label: Option<String>,
    },
    Email {
        address: String,
        #[serde(default)]
        label: Option<String>,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Youtube {
        url: String,
    },
    Quote {
        text: String,
        #[serde(default)]
        author: Option<String>,
    },
    Code {
        text: String,
        #[serde(default)]
        language: Option<String>,
    },
    InlineCode {
        text: String,
    },
    Spoiler {
        text: String,
        #[serde(default)]
        title: Option<String>,
    },
    List {
        items: Vec<String>,
        #[serde(default)]
        style: ListStyle,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    Header {
        text: String,
        #[serde(default = "default_header_level")]
        level: u8,
    },
    #[serde(alias = "hr")]
    Rule,
    Progress {
        percent: f64,
        #[serde(default)]
        label: Option<String>,
    },
    Superscript {
        text: String,
    },
    Subscript {
        text: String,
    },
    Mention {
        user: String,
    },
}

fn default_header_level() -> u8 {
    1
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold { .. } => "bold",
            Self::Italic { .. } => "italic",
            Self::Underline { .. } => "underline",
            Self::Strikethrough { .. } => "strikethrough",
            Self::Color { .. } => "color",
            Self::Size { .. } => "size",
            Self::Font { .. } => "font",
            Self::Align { .. } => "align",
            Self::Url { .. } => "url",
            Self::Email { .. } => "email",
            Self::Image { .. } => "image",
            Self::Youtube { .. } => "youtube",
            Self::Quote { .. } => "quote",
            Self::Code { .. } => "code",
            Self::InlineCode { .. } => "inline_code",
            Self::Spoiler { .. } => "spoiler",
            Self::List { .. } => "list",
            Self::Table { .. } => "table",
            Self::Header { .. } => "header",
            Self::Rule => "rule",
            Self::Progress { .. } => "progress",
            Self::Superscript { .. } => "superscript",
            Self::Subscript { .. } => "subscript",
            Self::Mention { .. } => "mention",
        }
    }

    /// True when the request has nothing to point at or enumerate.
    ///
    /// Wrapping operations are never blank: empty text still yields the
    /// empty tag pair so the caller can type between the tags.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Url { href, .. } => href.trim().is_empty(),
            Self::Email { address, .. } => address.trim().is_empty(),
            Self::Image { src, .. } => src.trim().is_empty(),
            Self::Youtube { url } => url.trim().is_empty(),
            Self::Mention { user } => user.trim().is_empty(),
            Self::List { items, .. } => items.is_empty(),
            Self::Table { rows } => rows.iter().flatten().all(|cell| cell.trim().is_empty()),
            _ => false,
        }
    }

    /// Render with the given generator; blank requests render as ""
    pub fn render(&self, generator: &dyn Generator) -> String {
        if self.is_blank() {
            return String::new();
        }

        match self {
            Self::Bold { text } => generator.bold(text),
            Self::Italic { text } => generator.italic(text),
            Self::Underline { text } => generator.underline(text),
            Self::Strikethrough { text } => generator.strikethrough(text),
            Self::Color { text, color } => generator.color(text, color),
            Self::Size { text, level } => generator.size(text, *level),
            Self::Font { text, family } => generator.font(text, family),
            Self::Align { text, alignment } => generator.align(text, *alignment),
            Self::Url { href, label } => generator.url(href, non_empty(label)),
            Self::Email { address, label } => generator.email(address, non_empty(label)),
            Self::Image { src, alt } => generator.image(src, non_empty(alt)),
            Self::Youtube { url } => generator.youtube(url),
            Self::Quote { text, author } => generator.quote(text, non_empty(author)),
            Self::Code { text, language } => generator.code(text, non_empty(language)),
            Self::InlineCode { text } => generator.inline_code(text),
            Self::Spoiler { text, title } => generator.spoiler(text, non_empty(title)),
            Self::List { items, style } => generator.list(items, *style),
            Self::Table { rows } => generator.table(rows),
            Self::Header { text, level } => generator.header(text, *level),
            Self::Rule => generator.horizontal_rule(),
            Self::Progress { percent, label } => {
                generator.progress_bar(*percent, non_empty(label))
            }
            Self::Superscript { text } => generator.superscript(text),
            Self::Subscript { text } => generator.subscript(text),
            Self::Mention { user } => generator.mention(user),
        }
    }

    /// Parameter problems worth telling the user about. Rendering goes
    /// ahead regardless.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        match self {
            Self::Url { href, .. } if !href.trim().is_empty() && !validate::is_valid_url(href) => {
                warnings.push(format!("'{href}' does not look like a URL"));
            }
            Self::Image { src, .. } if !src.trim().is_empty() && !validate::is_valid_url(src) => {
                warnings.push(format!("'{src}' does not look like an image URL"));
            }
            Self::Email { address, .. }
                if !address.trim().is_empty() && !validate::is_valid_email(address) =>
            {
                warnings.push(format!("'{address}' does not look like an e-mail address"));
            }
            Self::Color { color, .. } if !validate::is_valid_color(color) => {
                warnings.push(format!("'{color}' is not a hex or named color"));
            }
            Self::Youtube { url }
                if !url.trim().is_empty() && validate::youtube_id(url).is_none() =>
            {
                warnings.push(format!("no YouTube video ID found in '{url}', emitting a link"));
            }
            Self::Size { level, .. } if !(1..=7).contains(level) => {
                warnings.push(format!("size {level} is outside 1..=7 and will be clamped"));
            }
            Self::Header { level, .. } if !(1..=6).contains(level) => {
                warnings.push(format!("header level {level} is outside 1..=6 and will be clamped"));
            }
            Self::Progress { percent, .. } if !(0.0..=100.0).contains(percent) => {
                warnings.push(format!("{percent}% is outside 0..=100 and will be clamped"));
            }
            _ => {}
        }
        warnings
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{create_generator, Platform};

    #[test]
    fn test_deserialize_tagged_request() {
        let op: Operation =
            serde_json::from_str(r#"{"op": "quote", "text": "hi", "author": "Ann"}"#).unwrap();
        assert_eq!(
            op,
            Operation::Quote {
                text: "hi".to_string(),
                author: Some("Ann".to_string())
            }
        );
    }

    #[test]
    fn test_deserialize_defaults_and_aliases() {
        let op: Operation = serde_json::from_str(r#"{"op": "header", "text": "T"}"#).unwrap();
        assert_eq!(op, Operation::Header { text: "T".to_string(), level: 1 });

        let op: Operation = serde_json::from_str(r#"{"op": "hr"}"#).unwrap();
        assert_eq!(op, Operation::Rule);

        let op: Operation =
            serde_json::from_str(r#"{"op": "list", "items": ["a"], "style": "lettered"}"#)
                .unwrap();
        assert_eq!(op.name(), "list");
    }

    #[test]
    fn test_render_dispatches_per_platform() {
        let op = Operation::Bold { text: "x".to_string() };
        assert_eq!(op.render(create_generator(Platform::Phpbb).as_ref()), "[b]x[/b]");
        assert_eq!(op.render(create_generator(Platform::Discord).as_ref()), "**x**");
        assert_eq!(op.render(create_generator(Platform::Slack).as_ref()), "*x*");
    }

    #[test]
    fn test_empty_wrapping_ops_keep_tags() {
        let g = create_generator(Platform::Bbcode);
        let op = Operation::Italic { text: String::new() };
        assert_eq!(op.render(g.as_ref()), "[i][/i]");
    }

    #[test]
    fn test_blank_reference_ops_render_nothing() {
        let g = create_generator(Platform::Xenforo);
        let blank = [
            Operation::Url { href: " ".to_string(), label: None },
            Operation::Image { src: String::new(), alt: None },
            Operation::Youtube { url: String::new() },
            Operation::Mention { user: String::new() },
            Operation::List { items: vec![], style: ListStyle::Bullet },
            Operation::Table { rows: vec![vec![]] },
            Operation::Table {
                rows: vec![vec![String::new(), " ".to_string()], vec![String::new()]],
            },
        ];
        for op in blank {
            assert_eq!(op.render(g.as_ref()), "", "{} should render empty", op.name());
        }
    }

    #[test]
    fn test_empty_optional_params_are_ignored() {
        let g = create_generator(Platform::Bbcode);
        let op = Operation::Url {
            href: "https://a.io".to_string(),
            label: Some(String::new()),
        };
        assert_eq!(op.render(g.as_ref()), "[url]https://a.io[/url]");
    }

    #[test]
    fn test_every_platform_renders_rule() {
        for platform in Platform::ALL {
            let out = Operation::Rule.render(create_generator(platform).as_ref());
            assert!(!out.is_empty(), "{platform} rendered an empty rule");
        }
    }

    #[test]
    fn test_warnings() {
        let op = Operation::Color {
            text: "x".to_string(),
            color: "blurple".to_string(),
        };
        assert_eq!(op.warnings().len(), 1);

        let op = Operation::Url {
            href: "https://ok.example".to_string(),
            label: None,
        };
        assert!(op.warnings().is_empty());

        let op = Operation::Progress {
            percent: 140.0,
            label: None,
        };
        assert!(op.warnings()[0].contains("clamped"));

        let op = Operation::Youtube { url: "https://vimeo.com/1".to_string() };
        assert!(op.warnings()[0].contains("YouTube"));
    }
}
