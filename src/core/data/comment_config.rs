use serde::{Deserialize, Serialize};

/// Comment delimiters for one language.
///
/// This is exactly the `comments` object of a language configuration file:
///
/// ```json
/// { "comments": { "lineComment": "//", "blockComment": ["/*", "*/"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentConfig {
    /// Token that starts a comment running to end of line, e.g. `//`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_comment: Option<String>,
    /// Start and end tokens of a block comment, e.g. `("/*", "*/")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_comment: Option<(String, String)>,
}

impl CommentConfig {
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line_comment: Some(token.into()),
            block_comment: None,
        }
    }

    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line_comment: None,
            block_comment: Some((start.into(), end.into())),
        }
    }

    pub fn with_block(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_comment = Some((start.into(), end.into()));
        self
    }

    /// Returns true if neither a line nor a block comment is declared.
    pub fn is_empty(&self) -> bool {
        self.line_comment.is_none() && self.block_comment.is_none()
    }
}

/// The subset of a language configuration file this crate reads.
///
/// Every other field (brackets, auto-closing pairs, folding markers, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageConfigurationFile {
    #[serde(default)]
    pub comments: Option<CommentConfig>,
}
