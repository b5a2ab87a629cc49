use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const DEMO_SCHEMA: &str = r#"program: Demo
options:
  - name: doit
    type: flag
    description: DO it
  - name: name
    type: string
    description: The name of the person
  - name: arr
    type: string-array
    description: An array of stuff
  - name: age
    type: number
    description: The age of the person
  - name: efficiency
    type: range
    description: The efficiency of the person
"#;

fn write_schema(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("schema.yaml");
    fs::write(&path, contents).expect("failed to write schema");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typed-args"))
        .args(args)
        .output()
        .expect("failed to run typed-args")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn parse_prints_json_result() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "-name",
        "hhhh",
        "-age",
        "69",
        "-arr",
        "okay",
        "then",
        "-efficiency",
        "21",
        "40",
        "-doit",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["flags"], serde_json::json!(["doit"]));
    assert_eq!(json["strings"]["name"], "hhhh");
    assert_eq!(json["numbers"]["age"], 69.0);
    assert_eq!(json["string_arrays"]["arr"], serde_json::json!(["okay", "then"]));
    assert_eq!(json["ranges"]["efficiency"]["start"], 21.0);
    assert_eq!(json["ranges"]["efficiency"]["end"], 40.0);
}

#[test]
fn strict_parse_failure_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--",
        "-age",
        "old",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("'age'"), "stderr: {stderr}");
}

#[test]
fn lenient_parse_skips_failures() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--lenient",
        "--format",
        "snapshot",
        "--",
        "stray",
        "-age",
        "old",
        "-efficiency",
        "1",
        "2i",
        "-doit",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "doit=\nefficiency=1..2\n");
}

#[test]
fn parse_honours_start_and_marker() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&[
        "parse",
        "--schema",
        schema.to_str().unwrap(),
        "--marker",
        "/",
        "--start",
        "1",
        "--format",
        "snapshot",
        "--",
        "program",
        "/age",
        "-4",
        "/doit",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "age=-4\ndoit=\n");
}

#[test]
fn help_renders_schema_descriptions() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&["help", "--schema", schema.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Help for Demo\n"));
    assert!(text.contains("  -doit [A flag]\n     DO it\n"));
    assert!(text.contains("  -efficiency [A Number range between two values]\n"));
}

#[test]
fn help_uses_program_override() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&[
        "help",
        "--schema",
        schema.to_str().unwrap(),
        "--program",
        "person",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).starts_with("Help for person\n"));
}

#[test]
fn malformed_json_schema_is_reported_as_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");
    fs::write(&path, r#"{"options": [}"#).unwrap();

    let output = run(&["check", "--schema", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON error"), "stderr: {stderr}");
}

#[test]
fn check_reports_option_count() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(&dir, DEMO_SCHEMA);

    let output = run(&["check", "--schema", schema.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("5 option(s)"));
}

#[test]
fn check_rejects_duplicate_options() {
    let dir = TempDir::new().unwrap();
    let schema = write_schema(
        &dir,
        "options:\n  - name: a\n    type: flag\n  - name: a\n    type: number\n",
    );

    let output = run(&["check", "--schema", schema.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already registered"), "stderr: {stderr}");
}

#[test]
fn missing_schema_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let output = run(&["check", "--schema", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load"));
}
