use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn annotates_script_to_stdout() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf"));

    let output_pred = predicate::str::contains(":adv_clickwait 22,0,\"  \":")
        .and(predicate::str::contains(":adv_pagewait 0:"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("0.u");

    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf")).arg("-o").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 3);
    assert!(written.contains("^\u{10}The gulls were loud.^"));
}

#[test]
fn token_simple_format_flag() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf"))
        .arg("--format")
        .arg("token-simple");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<literal><text><click-wait>"));
}

#[test]
fn no_stamp_keeps_wait_markers() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf")).arg("--no-stamp");

    cmd.assert().success().stdout(
        predicate::str::contains("adv_clickwait")
            .not()
            .and(predicate::str::contains("^@^")),
    );
}

#[test]
fn config_file_overrides_commands() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("adv-mode.toml");
    fs::write(&config, "[render]\nclick_wait_command = \"cw\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf")).arg("-c").arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(":cw 19,1,\"\":"));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("sample.utf")).arg("-f").arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format: xml"));
}

#[test]
fn missing_input_fails() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg(fixture_path("does-not-exist.utf"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("adv-mode");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("report-json"));
}
