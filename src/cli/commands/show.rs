use anyhow::Result;

use super::super::{args::ShowCommand, exit_status::ExitStatus};
use super::{
    CommandResult, CommandSummary, ResolvedLanguage, ShowSummary,
    helper::{block_on, build_resolver},
};

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let resolver = build_resolver(&cmd.common)?;

    let resolved = block_on(async {
        let mut resolved = Vec::with_capacity(cmd.languages.len());
        for language in &cmd.languages {
            resolved.push(ResolvedLanguage {
                language: language.clone(),
                comments: resolver.get_comment_configuration(language).await,
            });
        }
        resolved
    })?;

    let exit_status = if resolved.iter().all(|r| r.comments.is_empty()) {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Show(ShowSummary {
            format: cmd.format,
            resolved,
        }),
        exit_status,
    })
}
