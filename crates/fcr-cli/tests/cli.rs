//! Runs the `fcr` binary against temporary state files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn seeded() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let seed = json!([
        {
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": {"name": "my-config", "namespace": "default"},
            "data": {"foo": "bar"}
        },
        {
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": {"name": "my-config-referencing", "namespace": "default"},
            "data": {"ref": "my-config"}
        },
        {
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": {"name": "batch-1", "namespace": "default", "labels": {"batch": "x"}}
        },
        {
            "apiVersion": "v1",
            "kind": "ConfigMap",
            "metadata": {"name": "batch-2", "namespace": "default", "labels": {"batch": "x"}}
        },
        {
            "apiVersion": "test.appthrust.com/v1",
            "kind": "Cat",
            "metadata": {"name": "tom", "namespace": "default"},
            "spec": {},
            "status": {"sleepy": true}
        }
    ]);
    fs::write(&path, seed.to_string()).unwrap();
    (dir, path)
}

fn fcr(state: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fcr"))
        .arg("--state")
        .arg(state)
        .args(args)
        .env_remove("FCR_TIMEOUT_MS")
        .env_remove("FCR_LOG")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn get_prints_the_object() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["get", "configmap", "my-config"]);
    assert_eq!(out.status.code(), Some(0));
    let obj = stdout_json(&out);
    assert_eq!(obj["data"]["foo"], "bar");
    assert_eq!(obj["kind"], "ConfigMap");
}

#[test]
fn get_missing_exits_not_found() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["get", "configmap", "missing"]);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
}

#[test]
fn get_option_prints_null() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["get-option", "cat", "felix"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_json(&out), Value::Null);

    let out = fcr(&state, &["get-option", "cat", "tom"]);
    assert_eq!(stdout_json(&out)["status"]["sleepy"], true);
}

#[test]
fn unknown_kind_is_usage_error() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["list", "dog"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn list_filters_by_label() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["list", "ConfigMap", "-n", "default", "-l", "batch=x"]);
    assert_eq!(out.status.code(), Some(0));
    let names: Vec<String> = stdout_json(&out)
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["metadata"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["batch-1", "batch-2"]);
}

#[test]
fn delete_all_of_rewrites_state() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["delete-all-of", "configmap", "-n", "default", "-l", "batch=x"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_json(&out), json!(2));

    let saved: Value = serde_json::from_str(&fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 3);

    let out = fcr(&state, &["list", "configmap", "-l", "batch=x"]);
    assert_eq!(stdout_json(&out), json!([]));
}

#[test]
fn follow_reads_the_reference() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["follow", "my-config-referencing", "--ref-key", "ref"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_json(&out)["metadata"]["name"], "my-config");
}

#[test]
fn expired_timeout_is_store_error() {
    let (_dir, state) = seeded();
    let out = fcr(&state, &["--timeout-ms", "0", "get", "cat", "tom"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn malformed_state_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    fs::write(&state, "not json").unwrap();
    let out = fcr(&state, &["list", "cat"]);
    assert_eq!(out.status.code(), Some(3));
}
