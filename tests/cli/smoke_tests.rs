use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::SnapshotFixture;

fn bare() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treels"));
    cmd.env_remove("TREELS_TREE");
    cmd
}

#[test]
fn shows_help_without_a_snapshot() {
    bare()
        .args(["--help", "--tree", "/definitely/not/here.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-A:"))
        .stdout(predicate::str::contains("--filter {file, dir}"));
}

#[test]
fn shows_version() {
    bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_filter() {
    let fixture = SnapshotFixture::interpreter();
    fixture
        .command()
        .args(["--filter", "link"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("link"));
}

#[test]
fn missing_snapshot_fails_on_stderr() {
    let dir = tempfile::tempdir().expect("temp dir");
    bare()
        .arg("--tree")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_snapshot_fails_on_stderr() {
    let fixture = SnapshotFixture::write("broken.json", "{\"name\": \"root\"");
    fixture
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON"));
}

#[test]
fn load_errors_name_the_snapshot_once() {
    let fixture = SnapshotFixture::write("listy.json", "[1]");
    let output = fixture.command().assert().failure().get_output().clone();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let path = fixture.path.display().to_string();
    assert_eq!(stderr.matches(path.as_str()).count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("loading snapshot"));
}

#[test]
fn snapshot_from_environment() {
    let fixture = SnapshotFixture::interpreter();
    bare()
        .env("TREELS_TREE", &fixture.path)
        .assert()
        .success()
        .stdout("LICENSE\nREADME.md\nast\n");
}

#[test]
fn default_snapshot_in_working_directory() {
    let fixture = SnapshotFixture::interpreter();
    let dir = fixture.path.parent().expect("fixture has a parent").to_path_buf();
    std::fs::copy(&fixture.path, dir.join("example_structure.json")).expect("copy");
    bare()
        .current_dir(&dir)
        .arg("ast")
        .assert()
        .success()
        .stdout("go.mod\nast.go\n");
}
