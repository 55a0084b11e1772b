//! Integration tests for the multidomain binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_app(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "APP_NAME=default").unwrap();
    fs::write(temp.path().join(".env.example.com"), "APP_NAME=example").unwrap();
    fs::create_dir_all(temp.path().join("storage/example_com")).unwrap();
    if let Some(config) = config {
        fs::create_dir_all(temp.path().join("config")).unwrap();
        fs::write(temp.path().join("config/domain.yml"), config).unwrap();
    }
    temp
}

fn multidomain(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.current_dir(temp.path())
        .env_remove("GATEWAY_INTERFACE")
        .env_remove("MULTIDOMAIN_BASE")
        .env_remove("APP_CONFIG_CACHE")
        .env_remove("APP_ROUTES_CACHE")
        .env("NO_COLOR", "1");
    cmd
}

const CONFIG: &str = r#"
domains:
  - shop.example.com
  - blog.example.org
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Per-domain environment"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_resolves_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("env file: .env"))
        .stderr(predicate::str::contains("No domain detected"));
    Ok(())
}

#[test]
fn cli_resolve_with_domain() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .args(["resolve", "--domain=shop.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env file: .env.example.com"))
        .stdout(predicate::str::contains("config-example_com.php"));
    Ok(())
}

#[test]
fn cli_domain_before_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .args(["--domain", "eu.example.com", "resolve", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""environment_file": ".env.example.com""#));
    Ok(())
}

#[test]
fn cli_detect_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    let output = multidomain(&temp)
        .args(["detect", "--json", "--domain=https://Shop.Example.com:8443"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["domain"], "shop.example.com");
    assert_eq!(value["scheme"], "https");
    assert_eq!(value["port"], "8443");
    Ok(())
}

#[test]
fn cli_detect_from_cgi_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .arg("detect")
        .env("GATEWAY_INTERFACE", "CGI/1.1")
        .env("HTTP_HOST", "eu.example.com")
        .env_remove("HTTP_X_FORWARDED_PROTO")
        .env_remove("REQUEST_SCHEME")
        .env_remove("HTTPS")
        .env_remove("SERVER_PORT")
        .assert()
        .success()
        .stdout(predicate::str::contains("full domain: http://eu.example.com"));
    Ok(())
}

#[test]
fn cli_base_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    let elsewhere = TempDir::new()?;
    multidomain(&elsewhere)
        .arg("--base")
        .arg(temp.path())
        .args(["resolve", "--domain=shop.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".env.example.com"));
    Ok(())
}

#[test]
fn cli_list_configured_domains() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(Some(CONFIG));
    multidomain(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOMAIN"))
        .stdout(predicate::str::contains("shop.example.com"))
        .stdout(predicate::str::contains(".env.example.com"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(Some(CONFIG));
    let output = multidomain(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["shop.example.com"]["env"], ".env.example.com");
    assert_eq!(value["blog.example.org"]["env"], ".env");
    Ok(())
}

#[test]
fn cli_list_without_config_warns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No domains configured"));
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(Some("domian: [a.com]"));
    multidomain(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse domain config"));
    Ok(())
}

#[test]
fn cli_quiet_hides_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .args(["--quiet", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env file: .env"))
        .stderr(predicate::str::contains("No domain detected").not());
    Ok(())
}

#[test]
fn cli_quiet_hides_header_but_keeps_labels() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_app(None);
    multidomain(&temp)
        .args(["--quiet", "resolve", "--domain=shop.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("domain: shop.example.com"))
        .stdout(predicate::str::contains("env file: .env.example.com"));
    Ok(())
}

#[test]
fn cli_quiet_help_text() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Hide headers and warnings"));
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("multidomain"));
    Ok(())
}

#[test]
fn cli_unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("multidomain"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}
