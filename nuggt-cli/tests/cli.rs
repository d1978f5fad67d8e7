use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
Welcome back
[3]: { [2]: card: (title: Hi), button: [(label: Go), prompt: Submit] }
[3]: { [2]: continue, alert: (title: Careful) }
";

fn nuggt() -> Command {
    let mut cmd = Command::cargo_bin("nuggt").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn lists_formats() {
    nuggt()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("nuggt (read, write)"))
        .stdout(predicate::str::contains("treeviz (write)"))
        .stdout(predicate::str::contains("json (read, write)"));
}

#[test]
fn inspects_with_treeviz_by_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.nuggt");
    fs::write(&path, SAMPLE).unwrap();

    nuggt()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("⧉ Document (2 blocks)"))
        .stdout(predicate::str::contains("card title=Hi [2x2]"));
}

#[test]
fn inspects_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.nuggt");
    fs::write(&path, SAMPLE).unwrap();

    nuggt()
        .current_dir(dir.path())
        .args(["inspect", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"row_span\": 2"));
}

#[test]
fn reads_standard_input() {
    nuggt()
        .args(["format", "-"])
        .write_stdin("Card: (b: 2, a: 1)\n\n\nSome text\n")
        .assert()
        .success()
        .stdout("card: (a: 1, b: 2)\nSome text\n");
}

#[test]
fn converts_json_back_to_dsl_by_extension() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("page.nuggt");
    fs::write(&source, SAMPLE).unwrap();

    let json = nuggt()
        .current_dir(dir.path())
        .args(["convert", "--to", "json"])
        .arg(&source)
        .output()
        .unwrap();
    assert!(json.status.success());

    let json_path = dir.path().join("page.json");
    fs::write(&json_path, &json.stdout).unwrap();

    nuggt()
        .current_dir(dir.path())
        .args(["convert", "--to", "nuggt"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[3]: { [2]: continue, alert: (title: Careful) }",
        ));
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("nuggt.toml"),
        "[parsing]\ngroupable_kinds = [\"tab\"]\n\n[output]\ndefault_format = \"yaml\"\n",
    )
    .unwrap();
    let path = dir.path().join("tabs.nuggt");
    fs::write(&path, "tab: (trigger: One)\ntab: (trigger: Two)\n").unwrap();

    nuggt()
        .current_dir(dir.path())
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger: Two"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();

    nuggt()
        .current_dir(dir.path())
        .args(["inspect", "does-not-exist.nuggt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.nuggt"));
}

#[test]
fn unknown_format_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.nuggt");
    fs::write(&path, SAMPLE).unwrap();

    nuggt()
        .current_dir(dir.path())
        .args(["convert", "--to", "html"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'html'"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();

    nuggt()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "format", "-"])
        .write_stdin("text\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
