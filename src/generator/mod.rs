mod bbcode;
mod discord;
mod discourse;
mod ipb;
mod markdown;
mod mybb;
mod operation;
mod phpbb;
mod slack;
mod smf;
mod template;
mod vbulletin;
mod xenforo;

pub use bbcode::BbcodeGenerator;
pub use discord::DiscordGenerator;
pub use discourse::DiscourseGenerator;
pub use ipb::IpbGenerator;
pub use mybb::MybbGenerator;
pub use operation::Operation;
pub use phpbb::PhpbbGenerator;
pub use slack::SlackGenerator;
pub use smf::SmfGenerator;
pub use vbulletin::VbulletinGenerator;
pub use xenforo::XenforoGenerator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validate;

/// Supported target platforms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Phpbb,
    Vbulletin,
    Mybb,
    /// Generic BBCode (default)
    #[default]
    Bbcode,
    Smf,
    Ipb,
    Xenforo,
    Discourse,
    Discord,
    Slack,
}

/// Markup family a platform belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Bbcode,
    Markdown,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bbcode => f.write_str("BBCode"),
            Self::Markdown => f.write_str("Markdown"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown platform '{0}' (run `forumfmt platforms` for the list)")]
    Unknown(String),
}

impl Platform {
    pub const ALL: [Platform; 10] = [
        Self::Phpbb,
        Self::Vbulletin,
        Self::Mybb,
        Self::Bbcode,
        Self::Smf,
        Self::Ipb,
        Self::Xenforo,
        Self::Discourse,
        Self::Discord,
        Self::Slack,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Phpbb => "phpbb",
            Self::Vbulletin => "vbulletin",
            Self::Mybb => "mybb",
            Self::Bbcode => "bbcode",
            Self::Smf => "smf",
            Self::Ipb => "ipb",
            Self::Xenforo => "xenforo",
            Self::Discourse => "discourse",
            Self::Discord => "discord",
            Self::Slack => "slack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Phpbb => "phpBB",
            Self::Vbulletin => "vBulletin",
            Self::Mybb => "MyBB",
            Self::Bbcode => "Generic BBCode",
            Self::Smf => "Simple Machines Forum",
            Self::Ipb => "Invision Community",
            Self::Xenforo => "XenForo",
            Self::Discourse => "Discourse",
            Self::Discord => "Discord",
            Self::Slack => "Slack",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Discourse | Self::Discord | Self::Slack => Family::Markdown,
            _ => Family::Bbcode,
        }
    }

    /// Per-message character limit for chat platforms
    pub fn message_limit(&self) -> Option<usize> {
        match self {
            Self::Discord => Some(2000),
            Self::Slack => Some(4000),
            _ => None,
        }
    }

    /// Lenient lookup: unknown identifiers fall back to the default platform
    pub fn parse_or_default(id: &str) -> Self {
        match id.parse() {
            Ok(platform) => platform,
            Err(_) => {
                tracing::debug!(
                    component = "generator",
                    requested = id,
                    fallback = Self::default().id(),
                    "Unknown platform, using default"
                );
                Self::default()
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let platform = match s.trim().to_ascii_lowercase().as_str() {
            "phpbb" | "phpbb3" => Self::Phpbb,
            "vbulletin" | "vb" => Self::Vbulletin,
            "mybb" => Self::Mybb,
            "bbcode" | "generic" => Self::Bbcode,
            "smf" => Self::Smf,
            "ipb" | "ips" | "invision" => Self::Ipb,
            "xenforo" | "xf" => Self::Xenforo,
            "discourse" => Self::Discourse,
            "discord" => Self::Discord,
            "slack" | "mrkdwn" => Self::Slack,
            _ => return Err(PlatformError::Unknown(s.to_string())),
        };
        Ok(platform)
    }
}

/// List marker style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Bullet,
    Numbered,
    Lettered,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Maps semantic formatting operations to platform markup.
///
/// The default methods are the generic BBCode templates; each platform
/// overrides only what its markup does differently. Every method is a pure
/// function of its arguments.
pub trait Generator: Send + Sync {
    fn platform(&self) -> Platform;

    fn bold(&self, text: &str) -> String {
        format!("[b]{text}[/b]")
    }

    fn italic(&self, text: &str) -> String {
        format!("[i]{text}[/i]")
    }

    fn underline(&self, text: &str) -> String {
        format!("[u]{text}[/u]")
    }

    fn strikethrough(&self, text: &str) -> String {
        format!("[s]{text}[/s]")
    }

    fn color(&self, text: &str, color: &str) -> String {
        format!("[color={color}]{text}[/color]")
    }

    /// `level` is a relative size from 1 (smallest) to 7 (largest)
    fn size(&self, text: &str, level: u8) -> String {
        format!("[size={}]{text}[/size]", template::clamp_size(level))
    }

    fn font(&self, text: &str, family: &str) -> String {
        format!("[font={family}]{text}[/font]")
    }

    fn align(&self, text: &str, alignment: Alignment) -> String {
        let a = alignment.as_str();
        format!("[align={a}]{text}[/align]")
    }

    fn url(&self, href: &str, label: Option<&str>) -> String {
        match label {
            Some(label) => format!("[url={href}]{label}[/url]"),
            None => format!("[url]{href}[/url]"),
        }
    }

    fn email(&self, address: &str, label: Option<&str>) -> String {
        match label {
            Some(label) => format!("[email={address}]{label}[/email]"),
            None => format!("[email]{address}[/email]"),
        }
    }

    fn image(&self, src: &str, _alt: Option<&str>) -> String {
        format!("[img]{src}[/img]")
    }

    /// Accepts a full YouTube URL or a bare video ID
    fn youtube(&self, input: &str) -> String {
        match validate::youtube_id(input) {
            Some(id) => format!("[youtube]{id}[/youtube]"),
            None => self.url(input, None),
        }
    }

    fn quote(&self, text: &str, author: Option<&str>) -> String {
        match author {
            Some(author) => format!("[quote=\"{author}\"]{text}[/quote]"),
            None => format!("[quote]{text}[/quote]"),
        }
    }

    fn code(&self, text: &str, language: Option<&str>) -> String {
        match language {
            Some(lang) => format!("[code={lang}]{text}[/code]"),
            None => format!("[code]{text}[/code]"),
        }
    }

    fn inline_code(&self, text: &str) -> String {
        self.font(text, "monospace")
    }

    fn spoiler(&self, text: &str, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("[spoiler={title}]{text}[/spoiler]"),
            None => format!("[spoiler]{text}[/spoiler]"),
        }
    }

    fn list(&self, items: &[String], style: ListStyle) -> String {
        let open = match style {
            ListStyle::Bullet => "[list]",
            ListStyle::Numbered => "[list=1]",
            ListStyle::Lettered => "[list=a]",
        };
        let mut out = String::from(open);
        for item in items {
            out.push_str("\n[*]");
            out.push_str(item);
        }
        out.push_str("\n[/list]");
        out
    }

    /// First row is the header row
    fn table(&self, rows: &[Vec<String>]) -> String {
        template::bbcode_table(rows, |cell| format!("[th]{cell}[/th]"))
    }

    /// `level` 1..=6 like HTML headings
    fn header(&self, text: &str, level: u8) -> String {
        self.size(&self.bold(text), template::header_size(level))
    }

    fn horizontal_rule(&self) -> String {
        "[hr]".to_string()
    }

    fn progress_bar(&self, percent: f64, label: Option<&str>) -> String {
        self.inline_code(&template::progress_line(percent, label))
    }

    fn superscript(&self, text: &str) -> String {
        format!("[sup]{text}[/sup]")
    }

    fn subscript(&self, text: &str) -> String {
        format!("[sub]{text}[/sub]")
    }

    fn mention(&self, user: &str) -> String {
        format!("@{user}")
    }
}

/// Create the generator for the given platform
pub fn create_generator(platform: Platform) -> Box<dyn Generator> {
    match platform {
        Platform::Phpbb => Box::new(PhpbbGenerator),
        Platform::Vbulletin => Box::new(VbulletinGenerator),
        Platform::Mybb => Box::new(MybbGenerator),
        Platform::Bbcode => Box::new(BbcodeGenerator),
        Platform::Smf => Box::new(SmfGenerator),
        Platform::Ipb => Box::new(IpbGenerator),
        Platform::Xenforo => Box::new(XenforoGenerator),
        Platform::Discourse => Box::new(DiscourseGenerator),
        Platform::Discord => Box::new(DiscordGenerator),
        Platform::Slack => Box::new(SlackGenerator),
    }
}
