use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ENV_VARS: [&str; 5] = [
    "FLIGHTDELAY_CONFIG",
    "FLIGHTDELAY_DEBUG",
    "FLIGHTDELAY_SCORER_URL",
    "FLIGHTDELAY_AIRPORTS",
    "FLIGHTDELAY_BIND",
];

fn bundled_airports() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/airports.csv")
}

fn write_config(dir: &Path, scorer_url: &str, airports: &Path) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "scorer_url: {scorer_url}\nscorer_timeout_secs: 2\nairports_path: {}\n",
        airports.display()
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn flightdelay() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("flightdelay"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn version_prints_package_version() {
    flightdelay()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "flightdelay version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn help_lists_commands() {
    flightdelay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn status_with_missing_config_fails() {
    flightdelay()
        .arg("status")
        .arg("--config")
        .arg("/nonexistent/flightdelay/config.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn status_with_invalid_scorer_url_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "localhost:5108", &bundled_airports());

    flightdelay()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scorer_url"));

    Ok(())
}

#[test]
fn status_reports_airports_and_unreachable_scorer() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9", &bundled_airports());

    let assert = flightdelay()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("30 airports loaded"));
    assert!(stdout.contains("unreachable"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_reports_missing_dataset_without_failing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "http://127.0.0.1:9",
        &temp.path().join("missing.csv"),
    );

    flightdelay()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No airports loaded"));

    Ok(())
}

#[test]
fn scorer_url_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9", &bundled_airports());

    flightdelay()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .arg("--scorer-url")
        .arg("http://127.0.0.1:7")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:7"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn status_reports_loaded_model() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _health = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "healthy", "model_loaded": true}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), &bundled_airports());

    flightdelay()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("has its model loaded"));

    Ok(())
}
