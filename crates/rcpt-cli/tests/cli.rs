//! Command-line tests for the `rcpt` binary.
//!
//! Every test points the config directory at a temp dir so a developer's
//! own config file never leaks in, and no test talks to the network.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TRANSCRIPT: &str = "[고객용]\n신용매출 영수증\n이마트 성수점\n2024-03-15 14:22\n합계 10,000\n결제금액 12,500\n";

fn rcpt(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rcpt").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("GOOGLE_VISION_API_KEY");
    cmd
}

#[test]
fn process_transcript_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, TRANSCRIPT).unwrap();

    rcpt(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"storeName\": \"이마트 성수점\""))
        .stdout(predicate::str::contains("\"tradeDate\": \"2024-03-15\""))
        .stdout(predicate::str::contains("\"totalAmount\": 12500"));
}

#[test]
fn process_saved_response_keeps_payload_as_raw_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("response.json");
    let response = serde_json::json!({
        "responses": [{ "textAnnotations": [{ "description": TRANSCRIPT }] }]
    });
    fs::write(&input, response.to_string()).unwrap();

    let output = rcpt(dir.path())
        .args(["process", "--format", "json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["storeName"], "이마트 성수점");
    assert_eq!(record["totalAmount"], 12500);
    assert!(record["rawText"].as_str().unwrap().contains("textAnnotations"));
}

#[test]
fn process_response_without_text_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, r#"{"responses": [{}]}"#).unwrap();

    rcpt(dir.path())
        .args(["process", "--format", "csv", "--show-warnings"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("알 수 없는 상호,,0"))
        .stderr(predicate::str::contains("Could not extract total amount"));
}

#[test]
fn process_image_without_api_key_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.jpg");
    fs::write(&input, b"\xFF\xD8\xFF\xE0").unwrap();

    rcpt(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_VISION_API_KEY"));
}

#[test]
fn process_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("receipt.pdf");
    fs::write(&input, b"%PDF").unwrap();

    rcpt(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    let outputs = dir.path().join("out");
    fs::create_dir_all(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), TRANSCRIPT).unwrap();
    fs::write(inputs.join("b.txt"), "다이소\n24/01/02\n승인금액 3,000").unwrap();

    rcpt(dir.path())
        .arg("batch")
        .arg(format!("{}/*.txt", inputs.display()))
        .arg("--output-dir")
        .arg(&outputs)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    assert!(outputs.join("a.json").exists());
    assert!(outputs.join("b.json").exists());

    let summary = fs::read_to_string(outputs.join("summary.csv")).unwrap();
    assert!(summary.contains("b.txt,success,다이소,24/01/02,3000"));
}

#[test]
fn batch_continue_on_error_reports_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.json"), r#"{"responses": []}"#).unwrap();
    fs::write(dir.path().join("bad.json"), "not json").unwrap();

    rcpt(dir.path())
        .arg("batch")
        .arg(format!("{}/*.json", dir.path().display()))
        .arg("--continue-on-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"));
}

#[test]
fn config_init_then_get() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.json");

    rcpt(dir.path())
        .args(["config", "init", "--output"])
        .arg(&config_path)
        .assert()
        .success();

    assert!(config_path.exists());

    rcpt(dir.path())
        .args(["config", "get", "vision.feature_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXT_DETECTION"));
}

#[test]
fn batch_never_overwrites_its_inputs() {
    let dir = TempDir::new().unwrap();
    let response = serde_json::json!({
        "responses": [{ "textAnnotations": [{ "description": TRANSCRIPT }] }]
    })
    .to_string();
    fs::write(dir.path().join("r.json"), &response).unwrap();
    fs::write(dir.path().join("r.txt"), TRANSCRIPT).unwrap();

    rcpt(dir.path())
        .arg("batch")
        .arg(format!("{}/r.*", dir.path().display()))
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    assert_eq!(fs::read_to_string(dir.path().join("r.json")).unwrap(), response);
    assert_eq!(fs::read_to_string(dir.path().join("r.txt")).unwrap(), TRANSCRIPT);

    for name in ["r.receipt.json", "r.receipt-2.json"] {
        let record: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(name)).unwrap()).unwrap();
        assert_eq!(record["storeName"], "이마트 성수점", "{name}");
    }
}

#[test]
fn config_subcommands_follow_global_config_option() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("team.json");

    rcpt(dir.path())
        .arg("-c")
        .arg(&config_path)
        .args(["config", "set", "vision.timeout_secs", "5"])
        .assert()
        .success();

    assert!(config_path.exists());
    assert!(!dir.path().join("rcpt").join("config.json").exists());

    rcpt(dir.path())
        .arg("-c")
        .arg(&config_path)
        .args(["config", "get", "vision.timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    rcpt(dir.path())
        .arg("-c")
        .arg(&config_path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team.json"));
}
