//! Manifest sources: where the registry gets its snapshot of installed extensions.

use std::{
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{
    ExtensionManifest,
    parsers::manifest::{MANIFEST_FILE_NAME, parse_manifest_file},
};

/// Enumerates the currently installed extension manifests.
///
/// Called once per registry rebuild. Order matters: later manifests override
/// earlier ones that declare the same language.
pub trait ManifestSource {
    fn list_all(&self) -> Vec<ExtensionManifest>;
}

/// A fixed, replaceable list of manifests.
#[derive(Debug, Default)]
pub struct StaticManifestSource {
    manifests: RwLock<Vec<ExtensionManifest>>,
}

impl StaticManifestSource {
    pub fn new(manifests: Vec<ExtensionManifest>) -> Self {
        Self {
            manifests: RwLock::new(manifests),
        }
    }

    /// Replace the installed set. Takes effect on the next rebuild.
    pub fn replace(&self, manifests: Vec<ExtensionManifest>) {
        *self.manifests.write().unwrap_or_else(PoisonError::into_inner) = manifests;
    }
}

impl ManifestSource for StaticManifestSource {
    fn list_all(&self) -> Vec<ExtensionManifest> {
        self.manifests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Discovers `<dir>/<extension>/package.json` manifests on disk.
///
/// Directories are scanned in the given order and extensions within one directory
/// by name, so later directories override earlier ones.
#[derive(Debug, Clone)]
pub struct DirectoryManifestSource {
    dirs: Vec<PathBuf>,
    ignores: Vec<Pattern>,
}

impl DirectoryManifestSource {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            ignores: Vec::new(),
        }
    }

    /// Skip extension directories whose path matches any of `patterns`.
    ///
    /// Invalid patterns are reported and ignored.
    pub fn with_ignores(mut self, patterns: &[String]) -> Self {
        for p in patterns {
            match Pattern::new(p) {
                Ok(pattern) => self.ignores.push(pattern),
                Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        }
        self
    }

    fn is_ignored(&self, extension_dir: &Path) -> bool {
        let path_str = extension_dir.to_string_lossy();
        self.ignores.iter().any(|p| p.matches(&path_str))
    }

    fn scan_dir(&self, dir: &Path, manifests: &mut Vec<ExtensionManifest>) {
        let walker = WalkDir::new(dir)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "cannot access extension path");
                    continue;
                }
            };
            if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE_NAME {
                continue;
            }

            let path = entry.path();
            if let Some(extension_dir) = path.parent()
                && self.is_ignored(extension_dir)
            {
                debug!(path = %extension_dir.display(), "extension ignored");
                continue;
            }

            match parse_manifest_file(path) {
                Ok(manifest) => manifests.push(manifest),
                Err(e) => warn!(error = %e, "skipping extension manifest"),
            }
        }
    }
}

impl ManifestSource for DirectoryManifestSource {
    fn list_all(&self) -> Vec<ExtensionManifest> {
        let mut manifests = Vec::new();
        for dir in &self.dirs {
            self.scan_dir(dir, &mut manifests);
        }
        debug!(count = manifests.len(), "discovered extension manifests");
        manifests
    }
}
