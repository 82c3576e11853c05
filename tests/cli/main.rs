use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod languages;
mod show;

const BIN_NAME: &str = "commentrc";

/// Directory (relative to the project root) that fixtures install extensions into.
pub const EXTENSIONS_DIR: &str = "exts";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup from walking above the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Install an extension under `exts/<name>/` with the given manifest.
    pub fn install_extension(&self, name: &str, manifest: &str) -> Result<()> {
        self.write_file(&format!("{}/{}/package.json", EXTENSIONS_DIR, name), manifest)
    }

    /// Write a file inside an installed extension.
    pub fn write_extension_file(&self, name: &str, path: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{}/{}/{}", EXTENSIONS_DIR, name, path), content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn show_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("show").arg("--extensions-dir").arg(EXTENSIONS_DIR);
        cmd
    }

    pub fn languages_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("languages").arg("--extensions-dir").arg(EXTENSIONS_DIR);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// An HTML-like extension embedding javascript and css, plus a javascript extension.
pub fn web_fixture() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.install_extension(
        "html",
        r#"{
            "name": "html",
            "publisher": "vscode",
            "contributes": {
                "languages": [{ "id": "html", "configuration": "./language-configuration.json" }],
                "grammars": [{
                    "language": "html",
                    "embeddedLanguages": { "source.js": "javascript", "source.css": "css" }
                }]
            }
        }"#,
    )?;
    test.write_extension_file(
        "html",
        "language-configuration.json",
        r#"{
            // HTML only has block comments
            "comments": { "blockComment": ["<!--", "-->"] },
            "brackets": [["<!--", "-->"], ["{", "}"],],
        }"#,
    )?;
    test.install_extension(
        "javascript",
        r#"{
            "name": "javascript",
            "publisher": "vscode",
            "contributes": {
                "languages": [{ "id": "javascript", "configuration": "./javascript.json" }]
            }
        }"#,
    )?;
    test.write_extension_file(
        "javascript",
        "javascript.json",
        r#"{ "comments": { "lineComment": "//", "blockComment": ["/*", "*/"] } }"#,
    )?;
    Ok(test)
}
