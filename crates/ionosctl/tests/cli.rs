//! Binary-level tests for `ionosctl`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn ionosctl() -> Command {
    let mut cmd = Command::cargo_bin("ionosctl").unwrap();
    for var in [
        "IONOS_OUTPUT",
        "IONOS_QUIET",
        "IONOS_NO_HEADERS",
        "IONOS_QUERY",
        "IONOSCTL_CONFIG",
        "IONOSCTL_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn datacenter() -> &'static str {
    r#"{
        "id": "dc-123",
        "metadata": {"state": "AVAILABLE"},
        "properties": {"name": "My DC", "location": "de/fra"}
    }"#
}

fn server_list() -> &'static str {
    r#"{
        "items": [
            {
                "id": "server-1",
                "href": "https://api.ionos.com/cloudapi/v6/datacenters/dc-123/servers/server-1",
                "metadata": {"state": "BUSY"},
                "properties": {"name": "web", "cores": 2, "ram": 2048}
            }
        ]
    }"#
}

#[test]
fn print_datacenter_text() {
    ionosctl()
        .args(["print", "datacenter"])
        .write_stdin(datacenter())
        .assert()
        .success()
        .stdout("DatacenterId  Name   Location  State\ndc-123        My DC  de/fra    AVAILABLE\n");
}

#[test]
fn print_from_file_with_cols() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("servers.json");
    fs::write(&path, server_list()).unwrap();

    ionosctl()
        .args(["print", "server", "--cols", "name,datacenterid,ram", "--no-headers"])
        .arg(&path)
        .assert()
        .success()
        .stdout("web  dc-123  2048 MB\n");
}

#[test]
fn print_api_json_passthrough() {
    let output = ionosctl()
        .args(["print", "datacenter", "-o", "api-json"])
        .write_stdin(datacenter())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["properties"]["location"], json!("de/fra"));
}

#[test]
fn print_json_with_query() {
    ionosctl()
        .args(["print", "server", "-o", "json", "--query", "items[0].id"])
        .write_stdin(server_list())
        .assert()
        .success()
        .stdout("\"server-1\"\n");
}

#[test]
fn query_with_text_output_fails() {
    ionosctl()
        .args(["print", "server", "--query", "items"])
        .write_stdin(server_list())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported with text output"));
}

#[test]
fn invalid_output_format_fails() {
    ionosctl()
        .args(["print", "server", "-o", "yaml"])
        .write_stdin(server_list())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format"));
}

#[test]
fn quiet_prints_nothing() {
    ionosctl()
        .args(["print", "server", "-q"])
        .write_stdin(server_list())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn wait_for_state_defers_output() {
    ionosctl()
        .args(["print", "server", "--wait-for-state", "AVAILABLE"])
        .write_stdin(server_list())
        .assert()
        .success()
        .stdout("");
}

#[test]
fn environment_selects_output() {
    ionosctl()
        .env("IONOS_OUTPUT", "json")
        .args(["print", "datacenter", "--query", "id"])
        .write_stdin(datacenter())
        .assert()
        .success()
        .stdout("\"dc-123\"\n");
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(
        &config,
        "no_headers: true\ncolumns:\n  datacenter: [State, Name]\n",
    )
    .unwrap();

    ionosctl()
        .args(["print", "datacenter", "--config"])
        .arg(&config)
        .write_stdin(datacenter())
        .assert()
        .success()
        .stdout("AVAILABLE  My DC\n");
}

#[test]
fn broken_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(&config, "output: [unclosed\n").unwrap();

    ionosctl()
        .env("IONOSCTL_CONFIG", &config)
        .args(["print", "datacenter"])
        .write_stdin(datacenter())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn columns_lists_schema() {
    ionosctl()
        .args(["columns", "dbaas-postgres-cluster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MaintenanceWindow"));
}

#[test]
fn missing_file_fails() {
    ionosctl()
        .args(["print", "datacenter", "/nonexistent/response.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
