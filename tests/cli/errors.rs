use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_parse_error_is_isolated() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a_good.py", "def ok():\n    return 1\n")?;
    test.write_file("src/b_broken.py", "def broken(:\n    pass\n")?;
    test.write_file("src/c_good.py", "class Fine:\n    pass\n")?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(test.tree("out"), @r"
    a_good.py
    a_good_ok.py
    c_good.py
    c_good_fine.py
    ");

    let summary = stdout(&output);
    assert!(summary.contains("Exploded 2 files to out"));
    assert!(summary.contains("1 file failed"));
    assert!(summary.contains("b_broken.py (parse)"));
    assert!(stderr(&output).contains("syntax error in"));

    Ok(())
}

#[test]
fn test_python2_source_is_a_parse_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/legacy.py", "print 'hello'\ndef f():\n    pass\n")?;
    test.write_file("src/modern.py", "def g():\n    print('hello')\n")?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(test.tree("out"), @r"
    modern.py
    modern_g.py
    ");
    assert!(stdout(&output).contains("legacy.py (parse)"));
    assert!(stderr(&output).contains("line 1, column 1 (print statement)"));

    Ok(())
}

#[test]
fn test_missing_input_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.explode_command("nope", "out").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Input path does not exist"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_input_must_be_a_directory() -> Result<()> {
    let test = CliTest::with_file("module.py", "def f():\n    pass\n")?;

    let output = test.explode_command("module.py", "out").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Input path is not a directory"));

    Ok(())
}

#[test]
fn test_output_must_not_be_a_file() -> Result<()> {
    let test = CliTest::with_file("src/a.py", "def f():\n    pass\n")?;
    test.write_file("out", "not a directory")?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Output path exists but is not a directory"));
    assert_eq!(test.read_file("out")?, "not a directory");

    Ok(())
}

#[test]
fn test_invalid_method_exits_with_error() -> Result<()> {
    let test = CliTest::with_file("src/a.py", "def f():\n    pass\n")?;

    let output = test
        .explode_command("src", "out")
        .args(["--method", "packages"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid value 'packages'"));
    assert!(!test.root().join("out").exists());

    Ok(())
}

#[test]
fn test_no_python_files() -> Result<()> {
    let test = CliTest::with_file("src/README.md", "# nothing here\n")?;

    let output = test.explode_command("src", "out").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("No Python files found"));
    assert!(!test.root().join("out").exists());

    Ok(())
}
