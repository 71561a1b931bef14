mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ForumfmtConfig;
use crate::generator::{Alignment, ListStyle, Platform};
use crate::logging::{self, LogFile};
use crate::output::Destination;

#[derive(Parser)]
#[command(
    name = "forumfmt",
    version,
    about = "Convert plain text to forum BBCode and chat Markdown"
)]
pub struct Cli {
    /// Target platform: phpbb, vbulletin, mybb, bbcode, smf, ipb, xenforo,
    /// discourse, discord, slack (unknown names fall back to bbcode)
    #[arg(short, long, global = true)]
    pub platform: Option<String>,
    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
    /// Save output to a timestamped file in the output directory
    #[arg(long, global = true, conflicts_with = "output")]
    pub save: bool,
    /// Split chat output at the platform's message limit
    #[arg(long, global = true)]
    pub split: bool,
    /// Log to stderr as well as the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Format text with a single operation
    Fmt {
        #[command(subcommand)]
        op: OpCommand,
    },
    /// Render a JSON array of requests, e.g. [{"op":"bold","text":"hi"}]
    Render {
        /// Request file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Print {"platform":..., "outputs":[...]} instead of markup
        #[arg(long)]
        json: bool,
    },
    /// Show every operation rendered for the platform
    Preview,
    /// List supported platforms
    Platforms,
    /// Show or change saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show, clear or rotate the log file
    Logs {
        /// Truncate the log file
        #[arg(long)]
        clear: bool,
        /// Move the log file aside with a timestamp
        #[arg(long, conflicts_with = "clear")]
        rotate: bool,
    },
}

/// Text arguments are read from stdin when omitted
#[derive(Subcommand)]
pub enum OpCommand {
    Bold {
        text: Option<String>,
    },
    Italic {
        text: Option<String>,
    },
    Underline {
        text: Option<String>,
    },
    #[command(alias = "strikethrough")]
    Strike {
        text: Option<String>,
    },
    Color {
        /// Hex (#ff0000) or named color
        #[arg(short, long)]
        color: String,
        text: Option<String>,
    },
    Size {
        /// Relative size, 1 (smallest) to 7 (largest)
        #[arg(short, long, default_value_t = 5)]
        level: u8,
        text: Option<String>,
    },
    Font {
        #[arg(short, long)]
        family: String,
        text: Option<String>,
    },
    Align {
        #[arg(short, long, value_enum, default_value_t = Alignment::Center)]
        alignment: Alignment,
        text: Option<String>,
    },
    Url {
        href: String,
        #[arg(short, long)]
        label: Option<String>,
    },
    Email {
        address: String,
        #[arg(short, long)]
        label: Option<String>,
    },
    Image {
        src: String,
        #[arg(short, long)]
        alt: Option<String>,
    },
    /// Embed a YouTube video from a URL or video ID
    Youtube {
        url: String,
    },
    Quote {
        #[arg(short, long)]
        author: Option<String>,
        text: Option<String>,
    },
    Code {
        #[arg(short, long)]
        lang: Option<String>,
        text: Option<String>,
    },
    InlineCode {
        text: Option<String>,
    },
    Spoiler {
        #[arg(short, long)]
        title: Option<String>,
        text: Option<String>,
    },
    /// One item per line; blank lines are skipped
    List {
        #[arg(short, long, value_enum, default_value_t = ListStyle::Bullet)]
        style: ListStyle,
        text: Option<String>,
    },
    /// One row per line, cells separated by the delimiter; first row is the header
    Table {
        #[arg(short, long, default_value_t = '|')]
        delimiter: char,
        text: Option<String>,
    },
    Header {
        /// Heading level, 1 to 6
        #[arg(short, long, default_value_t = 1)]
        level: u8,
        text: Option<String>,
    },
    /// Horizontal rule
    #[command(alias = "hr")]
    Rule,
    Progress {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
        #[arg(short, long)]
        label: Option<String>,
    },
    Sup {
        text: Option<String>,
    },
    Sub {
        text: Option<String>,
    },
    Mention {
        user: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set the default platform
    SetPlatform {
        platform: String,
    },
    /// Enable or disable splitting chat output by default
    SetSplit {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

/// Settings shared by every rendering command, resolved from flags and config
pub struct RenderContext {
    pub platform: Platform,
    pub split: bool,
    pub warn: bool,
    pub destination: Destination,
    pub config: ForumfmtConfig,
}

impl RenderContext {
    fn resolve(cli: &Cli, config: ForumfmtConfig) -> Self {
        let platform = match cli.platform.as_deref() {
            Some(id) => {
                if id.parse::<Platform>().is_err() {
                    tracing::warn!(
                        component = "cli",
                        requested = id,
                        "Unknown platform, falling back to {}",
                        Platform::default()
                    );
                }
                Platform::parse_or_default(id)
            }
            None => config.defaults.platform,
        };

        let destination = match (&cli.output, cli.save) {
            (Some(path), _) => Destination::File(path.clone()),
            (None, true) => Destination::Archive,
            (None, false) => Destination::Stdout,
        };

        Self {
            platform,
            split: cli.split || config.defaults.split,
            warn: config.defaults.warn,
            destination,
            config,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = ForumfmtConfig::load()?;

    let log = LogFile::in_dir(&config.paths.logs_dir());
    let _guard = match logging::init_logging(&log, cli.verbose) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };
    let ctx = RenderContext::resolve(&cli, config);

    match cli.command {
        Command::Fmt { op } => commands::fmt(&ctx, op),
        Command::Render { file, json } => commands::render(&ctx, file.as_deref(), json),
        Command::Preview => commands::preview(&ctx),
        Command::Platforms => commands::platforms(),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config_show(&ctx.config, &log),
            ConfigAction::SetPlatform { platform } => {
                commands::config_set_platform(ctx.config, &platform)
            }
            ConfigAction::SetSplit { enabled } => commands::config_set_split(ctx.config, enabled),
        },
        Command::Logs { clear, rotate } => commands::logs(&log, clear, rotate),
    }
}
