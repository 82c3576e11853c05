//! Extension manifest (`package.json`) parsing.
//!
//! Only `contributes.languages` and `contributes.grammars` are read. Entries with the
//! wrong shape are skipped one by one instead of failing the whole manifest.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use super::jsonc::{ParseError, parse_tolerant};
use crate::core::{ExtensionManifest, GrammarContribution, LanguageContribution};

pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("{0} is not a JSON object")]
    NotAnObject(PathBuf),
}

/// Read and parse the manifest at `path`. The extension root is its parent directory.
pub fn parse_manifest_file(path: &Path) -> Result<ExtensionManifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = path.parent().unwrap_or(Path::new("")).to_path_buf();
    parse_manifest(&content, root)
}

/// Parse manifest text for an extension installed at `extension_root`.
pub fn parse_manifest(
    content: &str,
    extension_root: PathBuf,
) -> Result<ExtensionManifest, ManifestError> {
    let json: Value = parse_tolerant(content).map_err(|source| ManifestError::Parse {
        path: extension_root.join(MANIFEST_FILE_NAME),
        source,
    })?;
    let Some(object) = json.as_object() else {
        return Err(ManifestError::NotAnObject(
            extension_root.join(MANIFEST_FILE_NAME),
        ));
    };

    let id = manifest_id(object.get("publisher"), object.get("name"), &extension_root);
    let contributes = object.get("contributes");

    let languages = contributes
        .and_then(|c| c.get("languages"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_language).collect())
        .unwrap_or_default();

    let grammars = contributes
        .and_then(|c| c.get("grammars"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_grammar).collect())
        .unwrap_or_default();

    Ok(ExtensionManifest {
        id,
        extension_root,
        languages,
        grammars,
    })
}

/// `publisher.name`, falling back to `name`, then to the directory name.
fn manifest_id(publisher: Option<&Value>, name: Option<&Value>, root: &Path) -> String {
    match (publisher.and_then(Value::as_str), name.and_then(Value::as_str)) {
        (Some(publisher), Some(name)) => format!("{}.{}", publisher, name),
        (None, Some(name)) => name.to_string(),
        _ => root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}

fn parse_language(entry: &Value) -> Option<LanguageContribution> {
    let id = entry.get("id")?.as_str()?;
    let configuration = entry
        .get("configuration")
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);
    Some(LanguageContribution {
        id: id.to_string(),
        configuration,
    })
}

fn parse_grammar(entry: &Value) -> Option<GrammarContribution> {
    let entry = entry.as_object()?;
    let language = entry
        .get("language")
        .and_then(Value::as_str)
        .map(String::from);
    let embedded_languages = entry
        .get("embeddedLanguages")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(scope, id)| Some((scope.clone(), id.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();
    Some(GrammarContribution {
        language,
        embedded_languages,
    })
}
