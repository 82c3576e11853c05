use anyhow::Result;
use insta::assert_json_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout, web_fixture};

#[test]
fn test_show_language_with_embedded_languages() -> Result<()> {
    let test = web_fixture()?;

    let output = test.show_command().arg("html").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "html\n  block <!-- -->\n  line //  block /* */\n"
    );
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let test = web_fixture()?;

    let output = test
        .show_command()
        .args(["html", "--format", "json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output))?;
    assert_json_snapshot!(value, @r#"
    [
      {
        "language": "html",
        "comments": [
          {
            "blockComment": [
              "<!--",
              "-->"
            ]
          },
          {
            "lineComment": "//",
            "blockComment": [
              "/*",
              "*/"
            ]
          }
        ]
      }
    ]
    "#);
    Ok(())
}

#[test]
fn test_show_unknown_language_fails() -> Result<()> {
    let test = web_fixture()?;

    let output = test.show_command().arg("cobol").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "cobol\n  \u{2718} no comment configuration\n");
    Ok(())
}

#[test]
fn test_show_succeeds_if_any_language_resolves() -> Result<()> {
    let test = web_fixture()?;

    let output = test.show_command().args(["cobol", "javascript"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("javascript\n  line //  block /* */\n"));
    Ok(())
}

#[test]
fn test_show_broken_embedded_configuration_is_skipped() -> Result<()> {
    let test = web_fixture()?;
    test.install_extension(
        "css",
        r#"{
            "name": "css",
            "contributes": {
                "languages": [{ "id": "css", "configuration": "./css.json" }]
            }
        }"#,
    )?;
    test.write_extension_file("css", "css.json", r#"{ "comments": { "#)?;

    let output = test.show_command().arg("html").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "html\n  block <!-- -->\n  line //  block /* */\n"
    );
    Ok(())
}

#[test]
fn test_show_later_extension_overrides_language() -> Result<()> {
    let test = web_fixture()?;
    // Sorted after "javascript", so it wins.
    test.install_extension(
        "zz-better-js",
        r#"{
            "name": "better-js",
            "contributes": {
                "languages": [{ "id": "javascript", "configuration": "js.json" }]
            }
        }"#,
    )?;
    test.write_extension_file(
        "zz-better-js",
        "js.json",
        r#"{ "comments": { "lineComment": "///" } }"#,
    )?;

    let output = test.show_command().arg("javascript").output()?;

    assert_eq!(stdout(&output), "javascript\n  line ///\n");
    Ok(())
}

#[test]
fn test_show_uses_config_file_dirs() -> Result<()> {
    let test = web_fixture()?;
    test.write_file(".commentrc.json", r#"{ "extensionsDirs": ["exts"] }"#)?;

    let output = test.command().args(["show", "javascript"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "javascript\n  line //  block /* */\n");
    Ok(())
}

#[test]
fn test_show_config_ignores_extensions() -> Result<()> {
    let test = web_fixture()?;
    test.write_file(
        ".commentrc.json",
        r#"{ "extensionsDirs": ["exts"], "ignores": ["**/javascript"] }"#,
    )?;

    let output = test.command().args(["show", "html"]).output()?;

    assert_eq!(stdout(&output), "html\n  block <!-- -->\n");
    Ok(())
}

#[test]
fn test_show_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".commentrc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let output = test.command().args(["show", "html"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));
    Ok(())
}
