//! CLI integration tests using the REAL append_manifests binary

mod common;

use predicates::prelude::*;

const MANIFEST: &str = "foo: 1\n";

fn workspace() -> common::TestWorkspace {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("manifest.yaml", MANIFEST);
    workspace.write_file("notes.txt", "a\nb\n");
    workspace
}

#[test]
fn test_help_output() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("YAML_FILE"))
        .stdout(predicate::str::contains("CONTENT_FILE"))
        .stdout(predicate::str::contains("KEY"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("<YAML_FILE> <CONTENT_FILE> <KEY>"))
        .stdout(predicate::str::ends_with("\n\n").not());
}

#[test]
fn test_hyphenated_key() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .args(["manifest.yaml", "notes.txt", "-x"])
        .assert()
        .success();

    let manifest = workspace.read_yaml("manifest.yaml");
    assert_eq!(common::strings(&manifest["-x"]), vec!["a\n", "b\n"]);
}

#[test]
fn test_wrong_argument_counts_leave_manifest_untouched() {
    let workspace = workspace();
    let cases: [&[&str]; 4] = [
        &["manifest.yaml"],
        &["manifest.yaml", "notes.txt"],
        &["manifest.yaml", "notes.txt", "bar", "extra"],
        &["manifest.yaml", "notes.txt", "bar", "extra", "more"],
    ];

    for args in cases {
        common::append_cmd(&workspace.path)
            .args(args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Usage:"));

        assert_eq!(workspace.read_file("manifest.yaml"), MANIFEST, "args: {args:?}");
    }
}

#[test]
fn test_empty_key_is_a_usage_error() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .args(["manifest.yaml", "notes.txt", ""])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert_eq!(workspace.read_file("manifest.yaml"), MANIFEST);
}

#[test]
fn test_success_is_silent() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .args(["manifest.yaml", "notes.txt", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let workspace = workspace();
    common::append_cmd(&workspace.path)
        .args(["-v", "manifest.yaml", "notes.txt", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("manifest updated"));
}

#[test]
fn test_dry_run_prints_manifest() {
    let workspace = workspace();
    let output = common::append_cmd(&workspace.path)
        .args(["--dry-run", "manifest.yaml", "notes.txt", "bar"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let printed: serde_yaml::Value =
        serde_yaml::from_slice(&output).expect("dry-run output should be YAML");
    assert_eq!(printed["foo"], serde_yaml::Value::from(1));
    assert_eq!(common::strings(&printed["bar"]), vec!["a\n", "b\n"]);
    assert_eq!(workspace.read_file("manifest.yaml"), MANIFEST);
}
