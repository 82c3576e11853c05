use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, EXTENSIONS_DIR, stderr, stdout, web_fixture};

#[test]
fn test_languages_text() -> Result<()> {
    let test = web_fixture()?;

    let output = test.languages_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let exts = test.root().join(EXTENSIONS_DIR);
    let expected = format!(
        "html        {}  embeds: javascript, css\njavascript  {}\n\u{2713} 2 languages registered\n",
        exts.join("html/language-configuration.json").display(),
        exts.join("javascript/javascript.json").display(),
    );
    assert_eq!(stdout(&output), expected);
    Ok(())
}

#[test]
fn test_languages_json() -> Result<()> {
    let test = web_fixture()?;

    let output = test.languages_command().args(["--format", "json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let exts = test.root().join(EXTENSIONS_DIR);
    let value: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        value,
        json!([
            {
                "languageId": "html",
                "configPath": exts.join("html/language-configuration.json"),
                "embeddedLanguages": ["javascript", "css"]
            },
            {
                "languageId": "javascript",
                "configPath": exts.join("javascript/javascript.json"),
                "embeddedLanguages": []
            }
        ])
    );
    Ok(())
}

#[test]
fn test_languages_without_configuration_are_not_listed() -> Result<()> {
    let test = CliTest::new()?;
    test.install_extension(
        "plain",
        r#"{ "name": "plain", "contributes": { "languages": [{ "id": "plaintext" }] } }"#,
    )?;

    let output = test.languages_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} 0 languages registered\n");
    Ok(())
}

#[test]
fn test_languages_skips_broken_manifest() -> Result<()> {
    let test = web_fixture()?;
    test.install_extension("broken", "{ this is not json")?;

    let output = test.languages_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("2 languages registered"));
    assert!(stderr(&output).contains("skipping extension manifest"));
    Ok(())
}
