use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use super::{OpCommand, RenderContext};
use crate::config::ForumfmtConfig;
use crate::generator::{create_generator, Alignment, ListStyle, Operation, Platform};
use crate::logging::{self, LogFile};
use crate::output;
use crate::request;

pub fn fmt(ctx: &RenderContext, op: OpCommand) -> Result<()> {
    let operation = into_operation(op, read_stdin)?;
    let generator = create_generator(ctx.platform);

    if ctx.warn {
        report_warnings(&operation);
    }

    tracing::info!(
        component = "cli",
        platform = %ctx.platform,
        op = operation.name(),
        "Rendering"
    );
    let markup = operation.render(generator.as_ref());
    output::route(&markup, ctx.platform, ctx.split, &ctx.destination, &ctx.config)
}

pub fn render(ctx: &RenderContext, file: Option<&Path>, json: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?,
        None => read_stdin()?,
    };

    let ops = request::parse_batch(&input).context("Invalid request batch")?;
    if ctx.warn {
        ops.iter().for_each(report_warnings);
    }

    let generator = create_generator(ctx.platform);
    let batch = request::render_batch(&ops, generator.as_ref());
    tracing::info!(
        component = "cli",
        platform = %ctx.platform,
        requests = ops.len(),
        "Rendered batch"
    );

    if json {
        let body = serde_json::to_string_pretty(&batch)?;
        // JSON output is one document, never split
        return output::route(&body, ctx.platform, false, &ctx.destination, &ctx.config);
    }
    output::route(&batch.joined(), ctx.platform, ctx.split, &ctx.destination, &ctx.config)
}

pub fn preview(ctx: &RenderContext) -> Result<()> {
    let generator = create_generator(ctx.platform);
    let mut body = format!(
        "{} ({}, {})\n",
        ctx.platform.display_name(),
        ctx.platform,
        ctx.platform.family()
    );

    for op in sample_operations() {
        body.push_str(&format!("\n== {} ==\n{}\n", op.name(), op.render(generator.as_ref())));
    }

    output::route(body.trim_end(), ctx.platform, false, &ctx.destination, &ctx.config)
}

pub fn platforms() -> Result<()> {
    println!("{:<11} {:<22} {:<9} {}", "ID", "Name", "Family", "Message limit");
    println!("{}", "-".repeat(60));
    for platform in Platform::ALL {
        let limit = platform
            .message_limit()
            .map(|n| format!("{n} chars"))
            .unwrap_or_else(|| "none".to_string());
        let marker = if platform == Platform::default() { " (default)" } else { "" };
        println!(
            "{:<11} {:<22} {:<9} {}{}",
            platform.id(),
            platform.display_name(),
            platform.family().to_string(),
            limit,
            marker
        );
    }
    Ok(())
}

pub fn config_show(config: &ForumfmtConfig, log: &LogFile) -> Result<()> {
    println!("Config file: {}", config.file().display());
    println!("Output dir:  {}", config.paths.output_dir().display());
    println!("Platform:    {}", config.defaults.platform);
    println!("Split:       {}", config.defaults.split);
    println!("Warnings:    {}", config.defaults.warn);
    println!(
        "Log file:    {} ({})",
        log.path().display(),
        logging::format_size(log.size()?)
    );
    Ok(())
}

pub fn config_set_platform(mut config: ForumfmtConfig, id: &str) -> Result<()> {
    // Saved defaults are validated strictly, unlike --platform
    let platform: Platform = id.parse()?;
    config.defaults.platform = platform;
    let path = config.save()?;
    tracing::info!(component = "config", platform = %platform, "Default platform changed");
    println!("Default platform: {} ({})", platform.display_name(), path.display());
    Ok(())
}

pub fn config_set_split(mut config: ForumfmtConfig, enabled: bool) -> Result<()> {
    config.defaults.split = enabled;
    let path = config.save()?;
    tracing::info!(component = "config", split = enabled, "Split default changed");
    println!("Split by default: {} ({})", enabled, path.display());
    Ok(())
}

pub fn logs(log: &LogFile, clear: bool, rotate: bool) -> Result<()> {
    if clear {
        log.clear()?;
        println!("Log cleared: {}", log.path().display());
    } else if rotate {
        let rotated = log.rotate()?;
        println!("Log rotated to: {}", rotated.display());
    } else {
        println!("Log file: {}", log.path().display());
        println!("Size:     {}", logging::format_size(log.size()?));
    }
    Ok(())
}

fn report_warnings(operation: &Operation) {
    for warning in operation.warnings() {
        tracing::warn!(component = "validate", op = operation.name(), "{}", warning);
        eprintln!("warning: {warning}");
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;
    Ok(input)
}

/// Drop the trailing line break a shell pipe adds
fn strip_trailing_newline(text: String) -> String {
    text.trim_end_matches(['\n', '\r']).to_string()
}

/// Turn a parsed subcommand into a request. `stdin` supplies text for
/// arguments left off the command line.
fn into_operation<F>(op: OpCommand, stdin: F) -> Result<Operation>
where
    F: Fn() -> Result<String>,
{
    let text = |arg: Option<String>| -> Result<String> {
        match arg {
            Some(text) => Ok(text),
            None => Ok(strip_trailing_newline(stdin()?)),
        }
    };

    let operation = match op {
        OpCommand::Bold { text: t } => Operation::Bold { text: text(t)? },
        OpCommand::Italic { text: t } => Operation::Italic { text: text(t)? },
        OpCommand::Underline { text: t } => Operation::Underline { text: text(t)? },
        OpCommand::Strike { text: t } => Operation::Strikethrough { text: text(t)? },
        OpCommand::Color { color, text: t } => Operation::Color {
            text: text(t)?,
            color,
        },
        OpCommand::Size { level, text: t } => Operation::Size {
            text: text(t)?,
            level,
        },
        OpCommand::Font { family, text: t } => Operation::Font {
            text: text(t)?,
            family,
        },
        OpCommand::Align { alignment, text: t } => Operation::Align {
            text: text(t)?,
            alignment,
        },
        OpCommand::Url { href, label } => Operation::Url { href, label },
        OpCommand::Email { address, label } => Operation::Email { address, label },
        OpCommand::Image { src, alt } => Operation::Image { src, alt },
        OpCommand::Youtube { url } => Operation::Youtube { url },
        OpCommand::Quote { author, text: t } => Operation::Quote {
            text: text(t)?,
            author,
        },
        OpCommand::Code { lang, text: t } => Operation::Code {
            text: text(t)?,
            language: lang,
        },
        OpCommand::InlineCode { text: t } => Operation::InlineCode { text: text(t)? },
        OpCommand::Spoiler { title, text: t } => Operation::Spoiler {
            text: text(t)?,
            title,
        },
        OpCommand::List { style, text: t } => Operation::List {
            items: parse_items(&text(t)?),
            style,
        },
        OpCommand::Table { delimiter, text: t } => Operation::Table {
            rows: parse_rows(&text(t)?, delimiter),
        },
        OpCommand::Header { level, text: t } => Operation::Header {
            text: text(t)?,
            level,
        },
        OpCommand::Rule => Operation::Rule,
        OpCommand::Progress { percent, label } => Operation::Progress { percent, label },
        OpCommand::Sup { text: t } => Operation::Superscript { text: text(t)? },
        OpCommand::Sub { text: t } => Operation::Subscript { text: text(t)? },
        OpCommand::Mention { user } => Operation::Mention { user },
    };
    Ok(operation)
}

/// One list item per non-blank line
fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One row per non-blank line. A leading and trailing delimiter is allowed,
/// so pipe tables pasted from Markdown parse the same way.
fn parse_rows(text: &str, delimiter: char) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = line.strip_prefix(delimiter).unwrap_or(line);
            let line = line.strip_suffix(delimiter).unwrap_or(line);
            line.split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

fn sample_operations() -> Vec<Operation> {
    let text = || "The quick brown fox".to_string();
    vec![
        Operation::Bold { text: text() },
        Operation::Italic { text: text() },
        Operation::Underline { text: text() },
        Operation::Strikethrough { text: text() },
        Operation::Color {
            text: text(),
            color: "#cc0000".to_string(),
        },
        Operation::Size { text: text(), level: 5 },
        Operation::Font {
            text: text(),
            family: "Georgia".to_string(),
        },
        Operation::Align {
            text: text(),
            alignment: Alignment::Center,
        },
        Operation::Url {
            href: "https://www.rust-lang.org".to_string(),
            label: Some("Rust".to_string()),
        },
        Operation::Email {
            address: "admin@example.com".to_string(),
            label: None,
        },
        Operation::Image {
            src: "https://example.com/banner.png".to_string(),
            alt: Some("Banner".to_string()),
        },
        Operation::Youtube {
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        },
        Operation::Quote {
            text: text(),
            author: Some("Aesop".to_string()),
        },
        Operation::Code {
            text: "fn main() {\n    println!(\"hi\");\n}".to_string(),
            language: Some("rust".to_string()),
        },
        Operation::InlineCode {
            text: "cargo run".to_string(),
        },
        Operation::Spoiler {
            text: text(),
            title: Some("Ending".to_string()),
        },
        Operation::List {
            items: vec!["Apples".to_string(), "Pears".to_string(), "Plums".to_string()],
            style: ListStyle::Lettered,
        },
        Operation::Table {
            rows: vec![
                vec!["Fruit".to_string(), "Qty".to_string()],
                vec!["Apples".to_string(), "12".to_string()],
                vec!["Pears".to_string(), "7".to_string()],
            ],
        },
        Operation::Header { text: text(), level: 2 },
        Operation::Rule,
        Operation::Progress {
            percent: 65.0,
            label: Some("Upload".to_string()),
        },
        Operation::Superscript { text: "2".to_string() },
        Operation::Subscript { text: "2".to_string() },
        Operation::Mention {
            user: "moderator".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_stdin() -> Result<String> {
        anyhow::bail!("stdin should not be read")
    }

    #[test]
    fn test_parse_items_skips_blank_lines() {
        assert_eq!(parse_items("one\n\n  two  \n"), vec!["one", "two"]);
        assert!(parse_items("\n\n").is_empty());
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows("| a | b |\n\n1|2", '|');
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);

        let rows = parse_rows("x\ty", '\t');
        assert_eq!(rows, vec![vec!["x", "y"]]);
    }

    #[test]
    fn test_text_argument_wins_over_stdin() {
        let op = into_operation(OpCommand::Bold { text: Some("hi".to_string()) }, no_stdin)
            .unwrap();
        assert_eq!(op, Operation::Bold { text: "hi".to_string() });
    }

    #[test]
    fn test_missing_text_reads_stdin() {
        let op = into_operation(
            OpCommand::List {
                style: ListStyle::Numbered,
                text: None,
            },
            || Ok("a\nb\n".to_string()),
        )
        .unwrap();
        assert_eq!(
            op,
            Operation::List {
                items: vec!["a".to_string(), "b".to_string()],
                style: ListStyle::Numbered
            }
        );

        let op = into_operation(OpCommand::Quote { author: None, text: None }, || {
            Ok("line\r\n".to_string())
        })
        .unwrap();
        assert_eq!(op, Operation::Quote { text: "line".to_string(), author: None });
    }

    #[test]
    fn test_reference_ops_never_touch_stdin() {
        let op = into_operation(OpCommand::Rule, no_stdin).unwrap();
        assert_eq!(op, Operation::Rule);
        let op = into_operation(OpCommand::Youtube { url: "x".to_string() }, no_stdin).unwrap();
        assert_eq!(op.name(), "youtube");
    }

    #[test]
    fn test_table_of_delimiters_only_renders_nothing() {
        let op = into_operation(
            OpCommand::Table {
                delimiter: '|',
                text: Some("|\n | |".to_string()),
            },
            no_stdin,
        )
        .unwrap();
        assert!(op.is_blank());
        assert_eq!(op.render(create_generator(Platform::Phpbb).as_ref()), "");
    }

    #[test]
    fn test_samples_cover_every_operation() {
        let names: std::collections::HashSet<_> =
            sample_operations().iter().map(Operation::name).collect();
        assert_eq!(names.len(), 24);
    }

    #[test]
    fn test_samples_render_on_every_platform() {
        for platform in Platform::ALL {
            let generator = create_generator(platform);
            assert_eq!(generator.platform(), platform);
            for op in sample_operations() {
                assert!(
                    !op.render(generator.as_ref()).is_empty(),
                    "{} rendered empty on {}",
                    op.name(),
                    platform
                );
            }
        }
    }
}
