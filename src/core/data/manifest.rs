use std::path::PathBuf;

/// A language contributed by an extension (`contributes.languages[]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageContribution {
    pub id: String,
    /// Configuration file path, relative to the extension root.
    pub configuration: Option<PathBuf>,
}

impl LanguageContribution {
    pub fn new(id: impl Into<String>, configuration: Option<&str>) -> Self {
        Self {
            id: id.into(),
            configuration: configuration.map(PathBuf::from),
        }
    }
}

/// A grammar contributed by an extension (`contributes.grammars[]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarContribution {
    /// Language the grammar belongs to. Injection grammars have none.
    pub language: Option<String>,
    /// `(scope name, language id)` pairs in declaration order.
    pub embedded_languages: Vec<(String, String)>,
}

impl GrammarContribution {
    pub fn new<'a>(
        language: impl Into<String>,
        embedded: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            language: Some(language.into()),
            embedded_languages: embedded
                .into_iter()
                .map(|(scope, id)| (scope.to_string(), id.to_string()))
                .collect(),
        }
    }
}

/// The parts of an installed extension's manifest that describe languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionManifest {
    pub id: String,
    pub extension_root: PathBuf,
    pub languages: Vec<LanguageContribution>,
    pub grammars: Vec<GrammarContribution>,
}

impl ExtensionManifest {
    pub fn new(id: impl Into<String>, extension_root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            extension_root: extension_root.into(),
            languages: Vec::new(),
            grammars: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: LanguageContribution) -> Self {
        self.languages.push(language);
        self
    }

    pub fn with_grammar(mut self, grammar: GrammarContribution) -> Self {
        self.grammars.push(grammar);
        self
    }
}
