//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_root(versions: &[(&str, &[&str])]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, runtimes) in versions {
        let dir = temp.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        for rt in *runtimes {
            fs::create_dir_all(dir.join("Python").join(rt)).unwrap();
        }
    }
    temp
}

fn standard_root() -> TempDir {
    setup_root(&[
        ("PowerFactory 2018 SP5", &["3.8"] as &[&str]),
        ("PowerFactory 2020", &["3.6", "3.8"]),
    ])
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PowerFactory"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_list_shows_installed_versions() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["--root", root.path().to_str().unwrap(), "list"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PowerFactory 2018 SP5"))
        .stdout(predicate::str::contains("PowerFactory 2020"));
    Ok(())
}

#[test]
fn cli_list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["--root", root.path().to_str().unwrap(), "list", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["name"], "PowerFactory 2020");
    Ok(())
}

#[test]
fn cli_list_empty_root_fails_with_code_2() -> Result<(), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["--root", root.path().to_str().unwrap(), "list"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No PowerFactory installations"));
    Ok(())
}

#[test]
fn cli_launch_dry_run_resolves_default_version() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--root",
        root.path().to_str().unwrap(),
        "launch",
        "--runtime",
        "3.8",
        "--dry-run",
        "--non-interactive",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolved PowerFactory 2020"))
        .stdout(predicate::str::contains("Dry run complete"));
    Ok(())
}

#[test]
fn cli_launch_rejects_denied_runtime() -> Result<(), Box<dyn std::error::Error>> {
    let root = setup_root(&[("PowerFactory 2020", &["3.5", "3.8"])]);
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--root",
        root.path().to_str().unwrap(),
        "launch",
        "--runtime",
        "3.5",
        "--dry-run",
        "--non-interactive",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not usable"));
    Ok(())
}

#[test]
fn cli_launch_rejects_unknown_feature() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--root",
        root.path().to_str().unwrap(),
        "launch",
        "--runtime",
        "3.8",
        "--feature",
        "time-travel",
        "--dry-run",
        "--non-interactive",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown license feature"));
    Ok(())
}

#[test]
fn cli_launch_dry_run_lists_feature_keys() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--root",
        root.path().to_str().unwrap(),
        "launch",
        "--runtime",
        "3.8",
        "--feature",
        "power-quality",
        "--feature",
        "stability",
        "--dry-run",
        "--non-interactive",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("power-quality, stability"));
    Ok(())
}

#[test]
fn cli_status_reports_runtime_and_resolution() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--root",
        root.path().to_str().unwrap(),
        "status",
        "--runtime",
        "3.8",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Host runtime:  3.8"))
        .stdout(predicate::str::contains("2 version(s)"));
    Ok(())
}

#[test]
fn cli_config_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let root = standard_root();
    let config_dir = TempDir::new()?;
    let config = config_dir.path().join("config.yml");
    fs::write(
        &config,
        format!(
            "install_root: {}\nruntime: '3.8'\ndefault_version: PowerFactory 2018 SP5\n",
            root.path().display()
        ),
    )?;
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args([
        "--config",
        config.to_str().unwrap(),
        "launch",
        "--dry-run",
        "--non-interactive",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resolved PowerFactory 2018 SP5"));
    Ok(())
}

#[test]
fn cli_malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = TempDir::new()?;
    let config = config_dir.path().join("config.yml");
    fs::write(&config, "licence_host: typo\n")?;
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["--config", config.to_str().unwrap(), "list"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
    Ok(())
}

#[test]
fn cli_study_dry_run_prints_plan() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let plan = temp.path().join("plan.yml");
    fs::write(
        &plan,
        r#"
project: Test1
study_case: OC Intact
calculations: [harmonic-load-flow, frequency-sweep]
export:
  result_object: Freq.Sweep.ElmRes
  target: /tmp/sweep.csv
  format: csv
"#,
    )?;
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["study", plan.to_str().unwrap(), "--dry-run"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run ComHLdf"))
        .stdout(predicate::str::contains("run ComFsweep"));
    Ok(())
}

#[test]
fn cli_study_missing_plan_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["study", "/nonexistent/plan.yml"]);
    cmd.assert().failure();
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pflaunch"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pflaunch"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}
