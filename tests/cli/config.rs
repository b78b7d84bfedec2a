use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr};

const SOURCE: &str = "def run():\n    pass\n";

#[test]
fn test_config_sets_method() -> Result<()> {
    let test = CliTest::with_file("src/app.py", SOURCE)?;
    test.write_file("src/.pyxplodrc.json", r#"{ "method": "dirs" }"#)?;

    let output = test.explode_command("src", "out").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    app/__init__.py
    app/run.py
    ");

    Ok(())
}

#[test]
fn test_cli_method_overrides_config() -> Result<()> {
    let test = CliTest::with_file("src/app.py", SOURCE)?;
    test.write_file("src/.pyxplodrc.json", r#"{ "method": "dirs" }"#)?;

    let output = test
        .explode_command("src", "out")
        .args(["--method", "files"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    app.py
    app_run.py
    ");

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("src/app.py", SOURCE)?;
    test.write_file("src/migrations/0001_initial.py", SOURCE)?;
    test.write_file("src/vendor/lib.py", SOURCE)?;
    test.write_file(
        "src/.pyxplodrc.json",
        r#"{ "ignores": ["**/migrations/**", "vendor"] }"#,
    )?;

    let output = test.explode_command("src", "out").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    app.py
    app_run.py
    ");

    Ok(())
}

#[test]
fn test_invalid_config_aborts() -> Result<()> {
    let test = CliTest::with_file("src/app.py", SOURCE)?;
    test.write_file("src/.pyxplodrc.json", r#"{ "ignores": ["**/[broken"] }"#)?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_unknown_method_in_config_aborts() -> Result<()> {
    let test = CliTest::with_file("src/app.py", SOURCE)?;
    test.write_file("src/.pyxplodrc.json", r#"{ "method": "modules" }"#)?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
