use std::fs;
use std::process::Command;

const SCENARIO: &str = r#"{
  "containers": [
    { "id": "gallery",
      "viewport": { "width": 300, "height": 200 },
      "content": { "width": 1000, "height": 200 },
      "direction": "rtl",
      "offset": { "x": 700, "y": 0 },
      "name": "Gallery" }
  ],
  "invokers": [
    { "id": "prev", "command": "page-inline-start", "target_id": "gallery" },
    { "id": "next", "command": "page-inline-end", "target_id": "gallery" }
  ],
  "steps": [
    { "action": "activate", "invoker": "next" },
    { "action": "command", "command": "page-inline-start", "target": "gallery" }
  ]
}"#;

fn write_scenario(contents: &str) -> tempfile::TempDir {
  let tmp = tempfile::TempDir::new().expect("temp dir");
  fs::write(tmp.path().join("scenario.json"), contents).expect("write scenario");
  tmp
}

#[test]
fn page_scroll_help_lists_flags() {
  let output = Command::new(env!("CARGO_BIN_EXE_page_scroll"))
    .arg("--help")
    .output()
    .expect("run page_scroll --help");

  assert!(output.status.success());
  let help = String::from_utf8_lossy(&output.stdout);
  for needle in ["--compact", "--env-overrides", "--check"] {
    assert!(help.contains(needle), "help missing {needle}; got:\n{help}");
  }
}

#[test]
fn page_scroll_replays_scenario_as_json() {
  let tmp = write_scenario(SCENARIO);
  let output = Command::new(env!("CARGO_BIN_EXE_page_scroll"))
    .arg("--compact")
    .arg(tmp.path().join("scenario.json"))
    .output()
    .expect("run page_scroll");

  assert!(
    output.status.success(),
    "stderr: {}",
    String::from_utf8_lossy(&output.stderr)
  );
  let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");

  assert_eq!(report["initial"][0]["aria_disabled"], true);
  assert_eq!(report["initial"][1]["name"], "Next page, horizontal, Gallery");

  let first = &report["steps"][0]["outcome"];
  assert_eq!(first["outcome"], "scrolled");
  assert_eq!(first["axis"], "horizontal");
  let final_offset = first["final_offset"].as_f64().unwrap();
  assert!((final_offset - 430.0).abs() < 1e-3);

  let second = &report["steps"][1]["outcome"];
  let final_offset = second["final_offset"].as_f64().unwrap();
  assert!((final_offset - 700.0).abs() < 1e-3);
  assert_eq!(report["steps"][1]["controls"][0]["aria_disabled"], true);
  assert_eq!(report["steps"][1]["controls"][0]["controls"], "gallery");
}

#[test]
fn page_scroll_check_rejects_unknown_invoker() {
  let tmp = write_scenario(r#"{ "steps": [ { "action": "activate", "invoker": "ghost" } ] }"#);
  let output = Command::new(env!("CARGO_BIN_EXE_page_scroll"))
    .arg("--check")
    .arg(tmp.path().join("scenario.json"))
    .output()
    .expect("run page_scroll --check");

  assert!(!output.status.success());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.contains("Step 0 references unknown invoker 'ghost'"),
    "stderr: {stderr}"
  );
}

#[test]
fn page_scroll_env_overrides_change_page_size() {
  let scenario = r#"{
    "containers": [
      { "id": "list", "viewport": { "width": 200, "height": 400 },
        "content": { "width": 200, "height": 4000 } }
    ],
    "steps": [ { "action": "command", "command": "page-down", "target": "list" } ]
  }"#;
  let tmp = write_scenario(scenario);
  let output = Command::new(env!("CARGO_BIN_EXE_page_scroll"))
    .args(["--compact", "--env-overrides"])
    .arg(tmp.path().join("scenario.json"))
    .env("FASTSCROLL_PAGE_OVERLAP", "0.25")
    .output()
    .expect("run page_scroll");

  assert!(output.status.success());
  let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
  let final_offset = report["steps"][0]["outcome"]["final_offset"]
    .as_f64()
    .unwrap();
  assert!((final_offset - 300.0).abs() < 1e-3);
}

#[test]
fn page_scroll_reports_unreadable_input_as_io_error() {
  let tmp = tempfile::TempDir::new().expect("temp dir");
  let output = Command::new(env!("CARGO_BIN_EXE_page_scroll"))
    .arg(tmp.path().join("missing.json"))
    .output()
    .expect("run page_scroll");

  assert!(!output.status.success());
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("page_scroll: I/O error:"), "stderr: {stderr}");
}
