//! Runs the built binary against a local product service

mod common;

use common::*;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::Ordering;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn nutriscan(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_nutriscan"))
            .args(&args)
            .output()
            .expect("binary runs")
    })
    .await
    .unwrap()
}

fn lookup_args(config: &NamedTempFile, base_url: &str, extra: &[&str], code: &str) -> Vec<String> {
    let mut args = vec![
        "--config-file".to_string(),
        config.path().display().to_string(),
        "--no-color".to_string(),
        "--log-level".to_string(),
        "error".to_string(),
        "--base-url".to_string(),
        base_url.to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    args.push("lookup".to_string());
    args.push(code.to_string());
    args
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_prints_card() {
    let (base_url, _) = start_product_service(vec![(TEST_BAR_CODE, test_bar_json())]).await;
    let config = config_file("");

    let output = nutriscan(lookup_args(&config, &base_url, &[], TEST_BAR_CODE)).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Looking up product..."));
    assert!(stdout.contains("Test Bar"));
    assert!(stdout.contains("▲ B"));
    assert!(stdout.contains("[E150]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_product_exits_with_failure() {
    let (base_url, _) = start_product_service(vec![]).await;
    let config = config_file("");

    let output = nutriscan(lookup_args(&config, &base_url, &[], UNKNOWN_CODE)).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("✗ Product not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_is_one_event_per_line() {
    let (base_url, _) = start_product_service(vec![(TEST_BAR_CODE, test_bar_json())]).await;
    let config = config_file("[output]\nformat = \"json\"\n");

    let output = nutriscan(lookup_args(&config, &base_url, &[], TEST_BAR_CODE)).await;
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("every line is JSON"))
        .collect();
    let card = events
        .iter()
        .rev()
        .find(|e| e["event"] == "card" && e["visible"] == true)
        .expect("card event");
    assert_eq!(card["card"]["name"], "Test Bar");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_config_is_reported() {
    let config = config_file("[lookup]\nretries = 3\n");

    let output = nutriscan(vec![
        "--config-file".to_string(),
        config.path().display().to_string(),
        "devices".to_string(),
    ])
    .await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error parsing configuration file"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_devices_without_scanner_reports_no_camera() {
    let config = config_file("[scanner]\ndevices = [\"/nonexistent/scanner0\"]\n");

    let output = nutriscan(vec![
        "--config-file".to_string(),
        config.path().display().to_string(),
        "devices".to_string(),
    ])
    .await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No camera found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scan_without_scanner_still_accepts_typed_codes() {
    let (base_url, hits) = start_product_service(vec![(TEST_BAR_CODE, test_bar_json())]).await;
    let config = config_file("[scanner]\ndevices = [\"/nonexistent/scanner0\"]\n");
    let args = vec![
        "--config-file".to_string(),
        config.path().display().to_string(),
        "--no-color".to_string(),
        "--base-url".to_string(),
        base_url,
        "scan".to_string(),
    ];

    let output = tokio::task::spawn_blocking(move || {
        let mut child = Command::new(env!("CARGO_BIN_EXE_nutriscan"))
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("binary runs");
        let mut stdin = child.stdin.take().expect("piped stdin");
        writeln!(stdin, "  {}  ", TEST_BAR_CODE).unwrap();
        drop(stdin);
        child.wait_with_output().expect("binary exits")
    })
    .await
    .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("✗ No camera found."));
    assert!(stdout.contains("Test Bar"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
