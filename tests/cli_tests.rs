// tests/cli_tests.rs
mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::fs;

fn jfiftool() -> Command {
    Command::cargo_bin("jfiftool").unwrap()
}

#[test]
fn test_list_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "in.jpg", &watermarked_image(b"cli"));

    jfiftool()
        .arg("list")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading "))
        .stdout(predicate::str::contains("\t2:\te0\t18\tAPP0 (JFIF tag)"))
        .stdout(predicate::str::contains("\tda\t"));
}

#[test]
fn test_list_rejects_non_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "in.txt", b"hello");

    jfiftool()
        .arg("list")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed container"));
}

#[test]
fn test_dump_and_patch_commands() {
    let dir = tempfile::tempdir().unwrap();
    let original = watermarked_image(b"cli");
    let input = write_file(dir.path(), "in.jpg", &original);
    let dumped = dir.path().join("wm.bin");
    let patched = dir.path().join("out.jpg");

    jfiftool().arg("dump").arg(&input).arg(&dumped).assert().success();
    assert_eq!(fs::read(&dumped).unwrap(), watermark_segment(b"cli"));

    jfiftool()
        .arg("patch")
        .arg(&input)
        .arg(&patched)
        .arg(&dumped)
        .assert()
        .success();
    assert_eq!(fs::read(&patched).unwrap(), original);

    // Second run refuses to clobber without --force
    jfiftool()
        .arg("patch")
        .arg(&input)
        .arg(&patched)
        .arg(&dumped)
        .assert()
        .failure();
    jfiftool()
        .args(["patch", "--force"])
        .arg(&input)
        .arg(&patched)
        .arg(&dumped)
        .assert()
        .success();
}

#[test]
fn test_dump_without_watermark() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "in.jpg", &build_image(&[jfif_app0()]));
    let output = dir.path().join("wm.bin");

    jfiftool()
        .arg("dump")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No watermark found"));
    assert!(!output.exists());
}
