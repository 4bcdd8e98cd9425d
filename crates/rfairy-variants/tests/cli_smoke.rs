use std::io::Write;

use assert_cmd::Command;

fn cli() -> Command {
    Command::cargo_bin("rfairy-variants").expect("binary available")
}

fn write_config(suffix: &str, text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(text.as_bytes()).expect("write config");
    file
}

#[test]
fn list_prints_builtins_in_order() {
    let output = cli().arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    let names: Vec<_> = text.lines().collect();
    assert_eq!(names.first(), Some(&"fairy"));
    assert!(names.contains(&"xiangqi"), "xiangqi missing: {text}");
    assert_eq!(names.len(), 21, "{text}");
}

#[test]
fn show_json_reports_derived_values() {
    let output = cli()
        .args(["show", "chess", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(summary["name"], "chess");
    assert_eq!(summary["max_pieces"], 32);
    assert_eq!(summary["nnue_dimensions"], 64 * 11 * 64);
    assert_eq!(summary["fast_attacks"], true);
}

#[test]
fn show_unknown_variant_fails() {
    cli().args(["show", "nosuchvariant"]).assert().failure();
}

#[test]
fn config_file_adds_variants() {
    let config = write_config(
        ".ini",
        "[archchess:chess]\narchbishop = a\npromotionPieceTypes = aqrbn\n",
    );
    let output = cli()
        .arg("--config")
        .arg(config.path())
        .args(["show", "archchess"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("variant archchess"), "{text}");
    assert!(text.contains("pieces       PNBRQAK"), "{text}");
}

#[test]
fn check_reports_failures_with_exit_code() {
    let config = write_config(
        ".toml",
        r#"
[[variant]]
name = "fine"
template = "chess"
nMoveRule = 100

[[variant]]
name = "broken"
template = "chess"
maxRank = 20
"#,
    );
    let output = cli()
        .arg("check")
        .arg(config.path())
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("ok     fine"), "{text}");
    assert!(text.contains("failed variant 'broken'"), "{text}");
    assert!(text.contains("1 loaded, 1 failed"), "{text}");
}

#[test]
fn check_accepts_valid_file() {
    let config = write_config(
        ".toml",
        "[[variant]]\nname = \"longgame\"\ntemplate = \"chess\"\nnMoveRule = 100\n",
    );
    cli().arg("check").arg(config.path()).assert().success();
}

#[test]
fn unsupported_extension_is_an_error() {
    let config = write_config(".yaml", "variant: []\n");
    cli().arg("check").arg(config.path()).assert().failure();
}
