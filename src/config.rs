use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{core::parsers::jsonc::parse_tolerant, utils::expand_home};

pub const CONFIG_FILE_NAME: &str = ".commentrc.json";

pub const DEFAULT_EXTENSIONS_DIR: &str = "~/.vscode/extensions";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories holding built-in extensions. Scanned first, so anything
    /// in `extensions_dirs` overrides them.
    #[serde(default)]
    pub builtin_dirs: Vec<String>,
    #[serde(default = "default_extensions_dirs")]
    pub extensions_dirs: Vec<String>,
    /// Glob patterns for extension directories to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_extensions_dirs() -> Vec<String> {
    vec![DEFAULT_EXTENSIONS_DIR.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            builtin_dirs: Vec::new(),
            extensions_dirs: default_extensions_dirs(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Directories to scan for extensions, in override order, with `~` expanded.
    pub fn manifest_dirs(&self) -> Vec<PathBuf> {
        self.builtin_dirs
            .iter()
            .chain(&self.extensions_dirs)
            .map(|dir| expand_home(dir))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = parse_tolerant(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
