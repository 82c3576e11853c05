//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow commentrc to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, LanguagesSummary, ShowSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CommentConfig;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Show(summary) => print_show_to(summary, &mut io::stdout().lock()),
        CommandSummary::Languages(summary) => {
            print_languages_to(summary, &mut io::stdout().lock())
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
            Ok(())
        }
    }
}

pub fn print_show_to<W: Write>(summary: &ShowSummary, writer: &mut W) -> Result<()> {
    if summary.format == OutputFormat::Json {
        return write_json(&summary.resolved, writer);
    }

    for resolved in &summary.resolved {
        let _ = writeln!(writer, "{}", resolved.language.bold());
        if resolved.comments.is_empty() {
            let _ = writeln!(
                writer,
                "  {} {}",
                FAILURE_MARK.yellow(),
                "no comment configuration".yellow()
            );
            continue;
        }
        for config in &resolved.comments {
            let _ = writeln!(writer, "  {}", format_comment_config(config));
        }
    }
    Ok(())
}

pub fn print_languages_to<W: Write>(summary: &LanguagesSummary, writer: &mut W) -> Result<()> {
    if summary.format == OutputFormat::Json {
        return write_json(&summary.definitions, writer);
    }

    let width = summary
        .definitions
        .iter()
        .map(|d| d.language_id.len())
        .max()
        .unwrap_or(0);

    for definition in &summary.definitions {
        let mut line = format!(
            "{:<width$}  {}",
            definition.language_id,
            definition.config_path.display(),
            width = width
        );
        if !definition.embedded_languages.is_empty() {
            line.push_str(&format!(
                "  {} {}",
                "embeds:".dimmed(),
                definition.embedded_languages.join(", ")
            ));
        }
        let _ = writeln!(writer, "{}", line);
    }

    let count = summary.definitions.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} registered",
            count,
            if count == 1 { "language" } else { "languages" }
        )
        .green()
    );
    Ok(())
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("Error: {}", error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}

/// `line //  block /* */`
fn format_comment_config(config: &CommentConfig) -> String {
    if config.is_empty() {
        return "(empty)".dimmed().to_string();
    }
    let mut parts = Vec::new();
    if let Some(line) = &config.line_comment {
        parts.push(format!("{} {}", "line".cyan(), line));
    }
    if let Some((start, end)) = &config.block_comment {
        parts.push(format!("{} {} {}", "block".cyan(), start, end));
    }
    parts.join("  ")
}

fn write_json<T: serde::Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    let _ = writeln!(writer, "{}", json);
    Ok(())
}
