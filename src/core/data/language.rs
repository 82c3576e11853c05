use std::path::PathBuf;

use serde::Serialize;

/// A registry entry: where a language's configuration lives and which
/// languages its grammars embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub language_id: String,
    /// Absolute path of the language configuration file.
    pub config_path: PathBuf,
    /// Embedded language ids, deduplicated, in first-seen order.
    pub embedded_languages: Vec<String>,
}
