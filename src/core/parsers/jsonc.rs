//! Tolerant JSON parsing for editor configuration files.
//!
//! Language configuration files and extension manifests are written as "JSON with
//! comments": `//` and `/* */` comments and trailing commas are allowed. Both are
//! removed in a preprocessing pass and the result is handed to `serde_json`.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unterminated block comment starting at byte {0}")]
    UnterminatedComment(usize),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parse `content` as JSON with comments and trailing commas.
pub fn parse_tolerant<T: DeserializeOwned>(content: &str) -> Result<T, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let stripped = strip_comments(content)?;
    let cleaned = strip_trailing_commas(&stripped);
    Ok(serde_json::from_str(&cleaned)?)
}

/// Remove `//` and `/* */` comments outside of string literals.
///
/// Newlines inside comments are kept so serde_json error positions still point
/// at the right line.
pub fn strip_comments(content: &str) -> Result<String, ParseError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();
    let mut in_string = false;

    while let Some((offset, c)) = chars.next() {
        if in_string {
            result.push(c);
            if c == '\\' {
                if let Some((_, next)) = chars.next() {
                    result.push(next);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            '/' => match chars.peek() {
                Some((_, '/')) => {
                    chars.next();
                    for (_, nc) in chars.by_ref() {
                        if nc == '\n' {
                            result.push('\n');
                            break;
                        }
                    }
                }
                Some((_, '*')) => {
                    chars.next();
                    let mut prev = ' ';
                    let mut closed = false;
                    for (_, nc) in chars.by_ref() {
                        if prev == '*' && nc == '/' {
                            closed = true;
                            break;
                        }
                        if nc == '\n' {
                            result.push('\n');
                        }
                        prev = nc;
                    }
                    if !closed {
                        return Err(ParseError::UnterminatedComment(offset));
                    }
                }
                _ => result.push(c),
            },
            _ => result.push(c),
        }
    }

    Ok(result)
}

/// Remove commas that are directly followed (ignoring whitespace) by `}` or `]`.
///
/// Expects comment-free input.
fn strip_trailing_commas(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    result.push(next);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                result.push(c);
            }
            ',' => {
                let rest = chars.clone().find(|ch| !ch.is_whitespace());
                if !matches!(rest, Some('}') | Some(']')) {
                    result.push(c);
                }
            }
            _ => result.push(c),
        }
    }

    result
}
