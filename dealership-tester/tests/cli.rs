use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "dealership-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_dealership-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("language-toggle"));
}

#[test]
fn cli_runs_every_logic_scenario_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_dealership-tester");
    let output_path = temp_path("logic");
    let output = Command::new(exe)
        .args([
            "--mode",
            "logic",
            "--report",
            "json",
            "--scenarios",
            "all",
            "--iterations",
            "3",
            "--seeds",
            "1,2",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let runs = report.as_array().expect("array of results");
    assert_eq!(runs.len(), 12);
    assert!(runs.iter().all(|run| run["passed"] == true));
}

#[test]
fn cli_runs_with_unknown_browser() {
    let exe = env!("CARGO_BIN_EXE_dealership-tester");
    let output_path = temp_path("browser");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--report",
            "json",
            "--scenarios",
            "smoke",
            "--seeds",
            "1",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
}

#[test]
fn cli_rejects_non_numeric_seed() {
    let exe = env!("CARGO_BIN_EXE_dealership-tester");
    let output = Command::new(exe)
        .args(["--seeds", "abc"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
