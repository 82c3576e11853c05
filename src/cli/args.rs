//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `show`: Resolve comment delimiters for one or more languages
//! - `languages`: List languages registered by installed extensions
//! - `init`: Initialize a .commentrc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Show(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Extension directory to scan (overrides config file, repeatable)
    #[arg(long = "extensions-dir", value_name = "DIR", env = "COMMENTRC_EXTENSIONS_DIR")]
    pub extensions_dirs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Language ids to resolve (e.g. html, javascript)
    #[arg(required = true)]
    pub languages: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the comment delimiters of languages and the languages they embed
    Show(ShowCommand),
    /// List languages contributed by installed extensions
    Languages(LanguagesCommand),
    /// Initialize a new .commentrc.json configuration file
    Init,
}
