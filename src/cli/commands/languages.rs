use anyhow::Result;

use super::super::{args::LanguagesCommand, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, LanguagesSummary, helper::build_resolver};

pub fn languages(cmd: LanguagesCommand) -> Result<CommandResult> {
    let resolver = build_resolver(&cmd.common)?;
    let registry = resolver.registry();
    let definitions = registry.definitions().into_iter().cloned().collect();

    Ok(CommandResult {
        summary: CommandSummary::Languages(LanguagesSummary {
            format: cmd.format,
            definitions,
        }),
        exit_status: ExitStatus::Success,
    })
}
