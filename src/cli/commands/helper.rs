use std::{env, future::Future};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::{
    config::load_config,
    core::{CommentConfigResolver, DirectoryManifestSource, FsReader},
};

pub type DiskResolver = CommentConfigResolver<DirectoryManifestSource, FsReader>;

/// Build a resolver over the extension directories from the command line,
/// falling back to the config file. Relative directories are taken from the
/// working directory.
pub fn build_resolver(common: &CommonArgs) -> Result<DiskResolver> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd)?.config;

    let dirs: Vec<_> = if common.extensions_dirs.is_empty() {
        config.manifest_dirs()
    } else {
        common.extensions_dirs.clone()
    }
    .into_iter()
    .map(|dir| cwd.join(dir))
    .collect();

    if common.verbose {
        for dir in dirs.iter().filter(|dir| !dir.is_dir()) {
            eprintln!(
                "{} Extension directory does not exist: {}",
                "warning:".bold().yellow(),
                dir.display()
            );
        }
    }

    let source = DirectoryManifestSource::new(dirs).with_ignores(&config.ignores);
    Ok(CommentConfigResolver::new(source, FsReader))
}

/// Drive `future` to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}
