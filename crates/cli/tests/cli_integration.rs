//! CLI integration tests.
//!
//! These run the `style-palette` binary end to end and check the wiring
//! between argument parsing, the core library and the output formats.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const COOL: &str = "冷色调（蓝、绿、紫）";

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("style-palette").expect("style-palette binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn answers_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ============================================================================
// hex / rgb
// ============================================================================

#[test]
fn hex_converts_hsl_triple() {
    cli()
        .args(["hex", "300", "70", "60"])
        .assert()
        .success()
        .stdout("#e052e0\n");
}

#[test]
fn hex_accepts_negative_hue() {
    cli()
        .args(["hex", "-120", "100", "50"])
        .assert()
        .success()
        .stdout("#0000ff\n");
}

#[test]
fn hex_json_output() {
    let v = stdout_json(cli().args(["--json", "hex", "0", "0", "20"]));
    assert_eq!(v["hex"], "#333333");
}

#[test]
fn rgb_prints_channels() {
    cli()
        .args(["rgb", "#e052e0"])
        .assert()
        .success()
        .stdout("224 82 224\n");
}

#[test]
fn rgb_rejects_signed_digit_pairs() {
    cli()
        .args(["rgb", "+f+f+f"])
        .assert()
        .code(10)
        .stdout("")
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn rgb_rejects_malformed_color_with_exit_10() {
    cli()
        .args(["rgb", "#e052"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("invalid color"));
}

// ============================================================================
// questions / labels
// ============================================================================

#[test]
fn questions_lists_all_six() {
    let v = stdout_json(cli().args(["questions", "--json"]));
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 6);
    assert_eq!(list[1]["id"], "mood");
    assert_eq!(list[1]["type"], "multiple");
    assert_eq!(list[2]["scaleRange"]["labels"][4], "很亮");
}

#[test]
fn questions_text_output_shows_prompts() {
    cli()
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("你更喜欢哪种设计风格？"))
        .stdout(predicate::str::contains("很暗 / 较暗 / 适中 / 较亮 / 很亮"));
}

#[test]
fn labels_lists_tables() {
    cli()
        .arg("labels")
        .assert()
        .success()
        .stdout(predicate::str::contains("工业风格  0"))
        .stdout(predicate::str::contains("充满活力  80"))
        .stdout(predicate::str::contains("混合色调"));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_from_flags() {
    cli()
        .args([
            "generate",
            "--style",
            "自然清新",
            "--mood",
            "清新自然",
            "--temperature",
            COOL,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheme 3:"))
        .stdout(predicate::str::contains("#e052e0"))
        .stdout(predicate::str::contains("主色"));
}

#[test]
fn generate_json_has_three_variants_by_default() {
    let v = stdout_json(cli().args([
        "--json",
        "generate",
        "--style",
        "自然清新",
        "--mood",
        "清新自然",
        "--temperature",
        COOL,
    ]));
    let schemes = v["schemes"].as_array().unwrap();
    assert_eq!(schemes.len(), 3);
    assert_eq!(schemes[1]["primary"], "#e052e0");
    assert_eq!(schemes[1]["background"], "#f4f1f4");
    assert_eq!(v["preferences"]["brightness"], 3.0);
}

#[test]
fn generate_variant_count_flag() {
    let v = stdout_json(cli().args(["generate", "--json", "-n", "5"]));
    assert_eq!(v["schemes"].as_array().unwrap().len(), 5);
}

#[test]
fn generate_repeated_mood_flags_are_joined() {
    let v = stdout_json(cli().args([
        "generate", "--json", "--mood", "平静放松", "--mood", "充满活力",
    ]));
    assert_eq!(v["preferences"]["mood"], "平静放松,充满活力");
}

#[test]
fn generate_from_answers_file() {
    let file = answers_file(
        r#"[
            {"questionId": "style", "value": "自然清新"},
            {"questionId": "mood", "value": ["清新自然"]},
            {"questionId": "brightness", "value": 3},
            {"questionId": "contrast", "value": 3},
            {"questionId": "temperature", "value": "冷色调（蓝、绿、紫）"},
            {"questionId": "complexity", "value": 2}
        ]"#,
    );
    let v = stdout_json(
        cli()
            .args(["generate", "--json", "--answers"])
            .arg(file.path()),
    );
    assert_eq!(v["schemes"][1]["primary"], "#e052e0");
    assert_eq!(v["preferences"]["complexity"], 2.0);
}

#[test]
fn generate_flags_override_answers_file() {
    let file = answers_file(r#"[{"questionId": "brightness", "value": 5}]"#);
    let v = stdout_json(
        cli()
            .args(["generate", "--json", "--brightness", "1", "--answers"])
            .arg(file.path()),
    );
    assert_eq!(v["preferences"]["brightness"], 1.0);
    assert_eq!(v["schemes"][1]["text"], "#e6e6e6");
}

#[test]
fn generate_reads_answers_from_stdin() {
    let v = stdout_json(
        cli()
            .args(["generate", "--json", "--answers", "-"])
            .write_stdin(r#"[{"questionId": "style", "value": "工业风格"}]"#),
    );
    assert_eq!(v["preferences"]["style"], "工业风格");
}

#[test]
fn generate_malformed_answers_exit_12() {
    let file = answers_file("{not json");
    cli()
        .args(["generate", "--answers"])
        .arg(file.path())
        .assert()
        .code(12)
        .stderr(predicate::str::contains("invalid answers"));
}

#[test]
fn generate_missing_answers_file_exit_11() {
    cli()
        .args(["generate", "--answers", "/nonexistent/answers.json"])
        .assert()
        .code(11);
}

#[test]
fn json_mode_reports_errors_as_json() {
    let output = cli()
        .args(["--json", "generate", "--answers", "/nonexistent/answers.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(11));
    let v: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(v["exit_code"], 11);
}
