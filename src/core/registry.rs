//! Language registry: the structural index from language id to configuration file.
//!
//! Built from a snapshot of extension manifests. Holds no parse results; loading the
//! configuration files is the resolver's job.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    core::{ExtensionManifest, LanguageDefinition},
    utils::join_relative,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRegistry {
    definitions: HashMap<String, LanguageDefinition>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifests(manifests: &[ExtensionManifest]) -> Self {
        let mut registry = Self::new();
        registry.rebuild(manifests);
        registry
    }

    /// Replace the index with one built from `manifests`.
    ///
    /// Languages that no manifest declares anymore are dropped. When several
    /// manifests declare the same language, the last one wins as a whole.
    pub fn rebuild(&mut self, manifests: &[ExtensionManifest]) {
        let mut definitions = HashMap::new();
        for manifest in manifests {
            index_manifest(manifest, &mut definitions);
        }

        debug!(
            manifests = manifests.len(),
            languages = definitions.len(),
            "rebuilt language registry"
        );
        self.definitions = definitions;
    }

    pub fn lookup(&self, language_id: &str) -> Option<&LanguageDefinition> {
        self.definitions.get(language_id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions, sorted by language id.
    pub fn definitions(&self) -> Vec<&LanguageDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().collect();
        definitions.sort_by(|a, b| a.language_id.cmp(&b.language_id));
        definitions
    }
}

fn index_manifest(manifest: &ExtensionManifest, out: &mut HashMap<String, LanguageDefinition>) {
    for language in &manifest.languages {
        let Some(configuration) = &language.configuration else {
            continue;
        };

        let definition = LanguageDefinition {
            language_id: language.id.clone(),
            config_path: join_relative(&manifest.extension_root, configuration),
            embedded_languages: embedded_languages(manifest, &language.id),
        };
        if let Some(previous) = out.insert(language.id.clone(), definition) {
            debug!(
                language = %language.id,
                previous = %previous.config_path.display(),
                extension = %manifest.id,
                "language definition overridden"
            );
        }
    }
}

/// Embedded languages declared by `manifest`'s own grammars for `language_id`.
fn embedded_languages(manifest: &ExtensionManifest, language_id: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut embedded = Vec::new();
    let grammars = manifest
        .grammars
        .iter()
        .filter(|grammar| grammar.language.as_deref() == Some(language_id));
    for grammar in grammars {
        for (_, id) in &grammar.embedded_languages {
            if seen.insert(id.as_str()) {
                embedded.push(id.clone());
            }
        }
    }
    embedded
}
