use anyhow::Result;
use indoc::indoc;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const BASE: &str = "import os, sys\ndef f():\n    return os.getcwd()\nclass C:\n    pass";

#[test]
fn test_files_method() -> Result<()> {
    let test = CliTest::with_file("src/base.py", BASE)?;

    let output = test.explode_command("src", "out").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    base.py
    base_c.py
    base_f.py
    ");
    assert_eq!(
        test.read_file("out/base_f.py")?,
        "import os\n\ndef f():\n    return os.getcwd()\n"
    );
    assert_eq!(test.read_file("out/base_c.py")?, "class C:\n    pass\n");
    assert_eq!(
        test.read_file("out/base.py")?,
        "import os, sys\nfrom .base_f import f\nfrom .base_c import C\n"
    );

    let summary = stdout(&output);
    assert!(summary.contains("Exploded 1 file to out using method 'files'"));
    assert!(summary.contains("2 definitions extracted from 1 file, 0 copied unchanged"));

    Ok(())
}

#[test]
fn test_dirs_method() -> Result<()> {
    let test = CliTest::with_file("src/base.py", BASE)?;

    let output = test
        .explode_command("src", "out")
        .args(["--method", "dirs"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    base/__init__.py
    base/c.py
    base/f.py
    ");
    assert_eq!(
        test.read_file("out/base/__init__.py")?,
        "import os, sys\nfrom .f import f\nfrom .c import C\n"
    );
    assert_eq!(
        test.read_file("out/base/f.py")?,
        "import os\n\ndef f():\n    return os.getcwd()\n"
    );

    Ok(())
}

#[test]
fn test_dunder_file_bypasses_dirs() -> Result<()> {
    let test = CliTest::with_file("src/pkg/__init__.py", BASE)?;

    let output = test
        .explode_command("src", "out")
        .args(["--method", "dirs"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    pkg/__init__.py
    pkg/__init___c.py
    pkg/__init___f.py
    ");
    assert!(!test.root().join("out/pkg/__init__").exists());

    Ok(())
}

#[test]
fn test_no_definitions_is_copied_verbatim() -> Result<()> {
    let source = indoc! {"
        # settings module
        import os

        DEBUG = os.environ.get('DEBUG') == '1'   # keep this comment
    "};
    let test = CliTest::with_file("src/settings.py", source)?;

    let output = test.explode_command("src", "flat").output()?;
    assert!(output.status.success());
    assert_eq!(test.read_file("flat/settings.py")?, source);
    assert!(stdout(&output).contains("0 definitions extracted from 0 files, 1 copied unchanged"));

    let output = test
        .explode_command("src", "dirs")
        .args(["--method", "dirs"])
        .output()?;
    assert!(output.status.success());
    assert_snapshot!(test.tree("dirs"), @"settings/__init__.py");
    assert_eq!(test.read_file("dirs/settings/__init__.py")?, source);

    Ok(())
}

#[test]
fn test_nested_tree_is_mirrored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app/__init__.py", "")?;
    test.write_file(
        "src/app/models/user.py",
        indoc! {"
            from dataclasses import dataclass, field
            from typing import Optional

            DEFAULT_ROLE = 'member'

            @dataclass
            class UserProfile:
                name: str
                role: str = DEFAULT_ROLE
                email: Optional[str] = None

            def make_user(name):
                return UserProfile(name)
        "},
    )?;
    test.write_file("src/app/models/__pycache__/user.cpython-312.pyc", "")?;

    let output = test.explode_command("src", "out").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    app/__init__.py
    app/models/user.py
    app/models/user_make_user.py
    app/models/user_user_profile.py
    ");
    assert_eq!(
        test.read_file("out/app/models/user_user_profile.py")?,
        indoc! {"
            from dataclasses import dataclass
            from typing import Optional

            DEFAULT_ROLE = 'member'

            @dataclass
            class UserProfile:
                name: str
                role: str = DEFAULT_ROLE
                email: Optional[str] = None
        "}
    );
    // Sibling definitions are not imported into each other.
    assert_eq!(
        test.read_file("out/app/models/user_make_user.py")?,
        "def make_user(name):\n    return UserProfile(name)\n"
    );
    assert_eq!(
        test.read_file("out/app/models/user.py")?,
        indoc! {"
            from dataclasses import dataclass, field
            from typing import Optional
            from .user_user_profile import UserProfile
            from .user_make_user import make_user

            DEFAULT_ROLE = 'member'
        "}
    );

    Ok(())
}

#[test]
fn test_collisions_get_numeric_suffixes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/models.py",
        "class UserProfile:\n    pass\n\ndef user_profile():\n    pass\n",
    )?;
    // A sibling source already owns the first candidate name.
    test.write_file("src/models_user_profile.py", "X = 1\n")?;

    let output = test.explode_command("src", "out").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.tree("out"), @r"
    models.py
    models_user_profile.py
    models_user_profile_2.py
    models_user_profile_3.py
    ");
    assert_eq!(test.read_file("out/models_user_profile.py")?, "X = 1\n");
    assert_eq!(
        test.read_file("out/models.py")?,
        "from .models_user_profile_2 import UserProfile\nfrom .models_user_profile_3 import user_profile\n"
    );

    Ok(())
}

#[test]
fn test_same_name_in_two_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.py", "def f():\n    return 'a'\n")?;
    test.write_file("src/b.py", "def f():\n    return 'b'\n")?;

    let output = test
        .explode_command("src", "dirs")
        .args(["--method", "dirs"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(test.tree("dirs"), @r"
    a/__init__.py
    a/f.py
    b/__init__.py
    b/f.py
    ");
    assert_eq!(test.read_file("dirs/a/__init__.py")?, "from .f import f\n");
    assert_eq!(test.read_file("dirs/b/f.py")?, "def f():\n    return 'b'\n");

    let output = test.explode_command("src", "flat").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(test.tree("flat"), @r"
    a.py
    a_f.py
    b.py
    b_f.py
    ");
    assert_eq!(test.read_file("flat/a.py")?, "from .a_f import f\n");
    assert_eq!(test.read_file("flat/b.py")?, "from .b_f import f\n");

    Ok(())
}

#[test]
fn test_output_is_deterministic() -> Result<()> {
    let test = CliTest::new()?;
    for i in 0..8 {
        test.write_file(
            &format!("src/pkg{}/mod{}.py", i % 3, i),
            &format!(
                "import json\nLIMIT = {i}\n\nclass Item{i}:\n    size = LIMIT\n\ndef load{i}(s):\n    return json.loads(s)\n"
            ),
        )?;
    }

    let first = test.explode_command("src", "out1").args(["-j", "4"]).output()?;
    let second = test.explode_command("src", "out2").args(["-j", "1"]).output()?;
    assert!(first.status.success() && second.status.success());

    let tree = test.tree("out1");
    assert_eq!(tree, test.tree("out2"));
    for file in tree.lines() {
        assert_eq!(
            test.read_file(&format!("out1/{}", file))?,
            test.read_file(&format!("out2/{}", file))?,
            "{} differs",
            file
        );
    }

    Ok(())
}
