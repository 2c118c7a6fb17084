use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn sample_vault(root: &Path) {
    write(root, "notes/Plan.md", "# Plan");
    write(root, "notes/Monday.md", "See [[notes/Plan#Goals]]");
    write(root, "notes/Friday.md", "Recap of [[Notes/Plan|the plan]]");
    write(root, "notes/Other.md", "Plain [[notes/Plan]] is not a backlink");
}

fn backlinks(xdg: &Path, vault: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vaultpress"));
    cmd.env("XDG_CONFIG_HOME", xdg);
    cmd.arg("backlinks").arg("notes/Plan").arg("--vault-root").arg(vault);
    cmd
}

#[test]
fn backlinks_table() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    sample_vault(&vault);

    backlinks(tmp.path(), &vault)
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::contains("notes/Friday"))
        .stdout(predicate::str::contains("notes/Monday"))
        .stdout(predicate::str::contains("notes/Other").not())
        .stdout(predicate::str::contains("-- 2 backlinks to notes/Plan --"));
}

#[test]
fn backlinks_quiet_is_sorted() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    sample_vault(&vault);

    backlinks(tmp.path(), &vault)
        .arg("--quiet")
        .assert()
        .success()
        .stdout("notes/Friday\nnotes/Monday\n");
}

#[test]
fn backlinks_json() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    sample_vault(&vault);

    let assert = backlinks(tmp.path(), &vault).arg("--json").assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(parsed[0]["source"], "notes/Friday");
    assert_eq!(parsed[0]["link"], "notes/friday");
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn backlinks_unknown_note_fails() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    sample_vault(&vault);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vaultpress"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["backlinks", "notes/Missing", "--vault-root"])
        .arg(&vault)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found in vault: notes/Missing"));
}
