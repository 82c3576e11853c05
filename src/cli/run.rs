use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, languages::languages, show::show},
};

/// Dispatches to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
