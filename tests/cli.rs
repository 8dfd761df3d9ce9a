//! Process-level behaviour of the `dbg` binary: exit codes and output channel.

use std::io::Write;
use std::process::{Command, Output};

mod common;

use common::{start_control_endpoint, Route};

fn dbg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbg"))
        .args(args)
        .env_remove("DBG_CONFIG")
        .env_remove("DBG_ENDPOINT")
        .env_remove("DBG_TIMEOUT")
        .env_remove("DBG_CONF_PATH")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_usage_error_exits_two() {
    let output = dbg(&["get-backend"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_command_exits_two() {
    let output = dbg(&["upstreams"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_bare_invocation_prints_help() {
    let output = dbg(&[]);
    assert_ne!(output.status.code(), Some(0));
    let help = String::from_utf8_lossy(&output.stderr);
    assert!(help.contains("backends"));
    assert!(help.contains("conf"));
}

#[test]
fn test_conf_dumps_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"http {}\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = dbg(&["--conf-path", &path, "conf"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"http {}\n");
}

#[test]
fn test_missing_conf_exits_one_with_message_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nginx.conf");

    let output = dbg(&["conf", "--conf-path", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nginx.conf"));
}

#[test]
fn test_invalid_config_file_exits_two() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[endpoint]\ntimeout_secs = 0\n").unwrap();

    let output = dbg(&["--config", file.path().to_str().unwrap(), "general"]);

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("endpoint.timeout_secs"));
}

#[test]
fn test_connection_refused_exits_one() {
    let endpoint = format!("http://127.0.0.1:{}", common::closed_port());

    let output = dbg(&["--endpoint", &endpoint, "backends"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/configuration/backends"));
    assert!(!stdout.contains('['));
}

#[tokio::test]
async fn test_not_found_exits_zero() {
    let addr = start_control_endpoint(vec![(
        "/configuration/backends",
        Route::ok(r#"[{"name":"a"}]"#),
    )])
    .await;
    let endpoint = format!("http://{}", addr);

    let output = tokio::task::spawn_blocking(move || {
        dbg(&["--endpoint", &endpoint, "backends", "get", "z"])
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"A backend of this name was not found.\n");
}

#[tokio::test]
async fn test_list_via_binary() {
    let addr = start_control_endpoint(vec![(
        "/configuration/backends",
        Route::ok(r#"[{"name":"a"},{"name":"b"}]"#),
    )])
    .await;
    let endpoint = format!("http://{}", addr);

    let output = tokio::task::spawn_blocking(move || {
        dbg(&["list-backends", "--endpoint", &endpoint])
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"a\nb\n");
}

#[test]
fn test_verbose_logs_config_file_to_stderr() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    config.write_all(b"[endpoint]\ntimeout_secs = 3\n").unwrap();
    let mut conf = tempfile::NamedTempFile::new().unwrap();
    conf.write_all(b"events {}\n").unwrap();

    let output = dbg(&[
        "-vv",
        "--config",
        config.path().to_str().unwrap(),
        "--conf-path",
        conf.path().to_str().unwrap(),
        "conf",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"events {}\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration file loaded"), "stderr: {}", stderr);
}
