use serde::Serialize;

use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{CommentConfig, LanguageDefinition};

#[derive(Debug)]
pub enum CommandSummary {
    Show(ShowSummary),
    Languages(LanguagesSummary),
    Init(InitSummary),
}

/// Comment configurations resolved for one requested language.
#[derive(Debug, Serialize)]
pub struct ResolvedLanguage {
    pub language: String,
    pub comments: Vec<CommentConfig>,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub format: OutputFormat,
    pub resolved: Vec<ResolvedLanguage>,
}

#[derive(Debug)]
pub struct LanguagesSummary {
    pub format: OutputFormat,
    /// Sorted by language id.
    pub definitions: Vec<LanguageDefinition>,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file already existed and nothing was written.
    pub error: Option<String>,
}

/// Result of running commentrc commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
