use assert_cmd::Command;
use predicates::prelude::*;

fn regen_cmd() -> Command {
    Command::cargo_bin("regen").unwrap()
}

#[test]
fn prints_strings_sorted_one_per_line() {
    regen_cmd()
        .arg("b|c|a")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn optional_group_includes_empty_line() {
    regen_cmd()
        .arg("(ab|cd)?")
        .assert()
        .success()
        .stdout("\nab\ncd\n");
}

#[test]
fn register_name_example_is_complete() {
    let assert = regen_cmd().arg("r(8|9|1[0-5])(b|w|d)?").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 32);
    assert!(lines.contains(&"r8"));
    assert!(lines.contains(&"r15w"));
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "output must be sorted");
}

#[test]
fn duplicates_kept_by_default() {
    regen_cmd().arg("a|a").assert().success().stdout("a\na\n");
}

#[test]
fn unique_flag_drops_duplicates() {
    regen_cmd()
        .args(["--unique", "a|a"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn json_format_emits_an_array() {
    let assert = regen_cmd().args(["-f", "json", "a|b"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, vec!["a", "b"]);
}

#[test]
fn unknown_format_fails() {
    regen_cmd()
        .args(["-f", "yaml", "a"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Available formats"));
}

#[test]
fn dot_star_fails_with_unsupported_construct() {
    regen_cmd()
        .arg(".*")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn caret_fails_with_unsupported_construct() {
    regen_cmd()
        .arg("^ab")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("beginning of line"));
}

#[test]
fn open_ended_repetition_explains_infinity() {
    regen_cmd()
        .arg("a{2,}")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no upper limit"));
}

#[test]
fn invalid_pattern_reports_syntax_error() {
    regen_cmd().arg("(ab").assert().failure().code(1);
}

#[test]
fn missing_pattern_shows_help() {
    regen_cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
