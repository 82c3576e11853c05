//! Comment configuration resolver.
//!
//! Lazily loads each language's configuration file on first request and caches the
//! outcome, including failures, until the next rebuild. A request for one language
//! returns its own comment configuration followed by those of the languages its
//! grammars embed (one level deep).
//!
//! ## Cache states
//!
//! A language id is either missing from the cache (never attempted, or not known to
//! the registry), [`CacheEntry::Present`], or [`CacheEntry::Absent`] (attempted,
//! nothing usable). Absent entries are never retried until [`CommentConfigResolver::rebuild`].
//!
//! ## Concurrency
//!
//! The state lock is never held across the file read. Two concurrent requests for the
//! same uncached language may both read the file; both store the same result.


use std::{
    collections::HashMap,
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;
use tracing::debug;

use crate::core::{
    CommentConfig, LanguageConfigurationFile, LanguageRegistry,
    parsers::jsonc::{ParseError, parse_tolerant},
    reader::FileReader,
    sources::ManifestSource,
};

/// Cached outcome of loading one language's configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    Present(CommentConfig),
    /// The file was missing, unreadable, malformed, or had no `comments` field.
    Absent,
}

impl CacheEntry {
    pub fn config(&self) -> Option<&CommentConfig> {
        match self {
            CacheEntry::Present(config) => Some(config),
            CacheEntry::Absent => None,
        }
    }
}

/// Why a configuration file could not be loaded. Only ever logged.
#[derive(Debug, Error)]
enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Default)]
struct ResolverState {
    registry: LanguageRegistry,
    cache: HashMap<String, CacheEntry>,
    /// Bumped on every rebuild so loads started earlier don't land in the new cache.
    generation: u64,
}

pub struct CommentConfigResolver<S, R> {
    source: S,
    reader: R,
    state: Mutex<ResolverState>,
}

impl<S: ManifestSource, R: FileReader> CommentConfigResolver<S, R> {
    /// Create a resolver and build the initial registry from `source`.
    pub fn new(source: S, reader: R) -> Self {
        let resolver = Self {
            source,
            reader,
            state: Mutex::new(ResolverState::default()),
        };
        resolver.rebuild();
        resolver
    }

    /// Re-enumerate manifests, replace the registry, and drop every cached result.
    pub fn rebuild(&self) {
        let manifests = self.source.list_all();
        let mut state = self.lock();
        state.registry.rebuild(&manifests);
        state.cache.clear();
        state.generation += 1;
    }

    /// Comment configurations for `language_id` followed by its embedded languages.
    ///
    /// Never fails: unknown languages and unusable configuration files simply
    /// contribute nothing, so the result may be empty.
    pub async fn get_comment_configuration(&self, language_id: &str) -> Vec<CommentConfig> {
        let mut configs = Vec::new();

        if let Some(config) = self.ensure_loaded(language_id).await {
            configs.push(config);
        }

        let embedded = self
            .lock()
            .registry
            .lookup(language_id)
            .map(|definition| definition.embedded_languages.clone())
            .unwrap_or_default();

        for embedded_id in embedded {
            if let Some(config) = self.ensure_loaded(&embedded_id).await {
                configs.push(config);
            }
        }

        configs
    }

    /// Snapshot of the current registry.
    pub fn registry(&self) -> LanguageRegistry {
        self.lock().registry.clone()
    }

    /// Current cache state for `language_id`; `None` means never attempted.
    pub fn cached(&self, language_id: &str) -> Option<CacheEntry> {
        self.lock().cache.get(language_id).cloned()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    async fn ensure_loaded(&self, language_id: &str) -> Option<CommentConfig> {
        let (path, generation) = {
            let state = self.lock();
            if let Some(entry) = state.cache.get(language_id) {
                debug!(language = language_id, "comment configuration cache hit");
                return entry.config().cloned();
            }
            let definition = state.registry.lookup(language_id)?;
            (definition.config_path.clone(), state.generation)
        };

        let entry = match self.load(&path).await {
            Ok(Some(config)) => CacheEntry::Present(config),
            Ok(None) => {
                debug!(
                    language = language_id,
                    path = %path.display(),
                    "no comments field in language configuration"
                );
                CacheEntry::Absent
            }
            Err(e) => {
                debug!(
                    language = language_id,
                    path = %path.display(),
                    error = %e,
                    "language configuration unavailable"
                );
                CacheEntry::Absent
            }
        };

        let mut state = self.lock();
        if state.generation == generation {
            state.cache.insert(language_id.to_string(), entry.clone());
        } else {
            debug!(language = language_id, "discarding load from before rebuild");
        }
        entry.config().cloned()
    }

    async fn load(&self, path: &Path) -> Result<Option<CommentConfig>, LoadError> {
        let bytes = self.reader.read(path).await?;
        // Invalid sequences become U+FFFD, usually inside a comment.
        let content = String::from_utf8_lossy(&bytes);
        let file: LanguageConfigurationFile = parse_tolerant(&content)?;
        Ok(file.comments)
    }

    fn lock(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
