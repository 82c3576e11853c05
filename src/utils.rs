//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Joins `relative` onto `root`, dropping a leading `./` so the result reads
/// `<root>/file` instead of `<root>/./file`.
///
/// The result always stays under `root`: a leading `/` (or drive prefix) on
/// `relative` is dropped instead of replacing `root`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use commentrc::utils::join_relative;
///
/// let root = Path::new("/ext/html");
/// assert_eq!(
///     join_relative(root, Path::new("./language-configuration.json")),
///     PathBuf::from("/ext/html/language-configuration.json")
/// );
/// assert_eq!(join_relative(root, Path::new("cfg/html.json")), PathBuf::from("/ext/html/cfg/html.json"));
/// assert_eq!(join_relative(root, Path::new("/etc/lang.json")), PathBuf::from("/ext/html/etc/lang.json"));
/// ```
pub fn join_relative(root: &Path, relative: &Path) -> PathBuf {
    let mut joined = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            other => joined.push(other),
        }
    }
    joined
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without `~`, or when no home directory is known, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
