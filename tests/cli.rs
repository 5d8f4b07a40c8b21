use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn corpus_profile() -> Command {
    Command::new(env!("CARGO_BIN_EXE_corpus_profile"))
}

fn corpus(suffix: &str, text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("temp file");
    file.write_all(text.as_bytes()).expect("write");
    file
}

#[test]
fn shows_help() {
    corpus_profile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("corpus_profile"));
}

#[test]
fn profiles_line_file() {
    let file = corpus(".txt", "Hello world!\n  \n<p>hi</p>\n");
    corpus_profile()
        .arg(file.path())
        .args(["--top", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3  units (1 empty)"))
        .stdout(predicate::str::contains("Top 3 tokens"))
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn keep_case_preserves_tokens() {
    let file = corpus(".txt", "Hello Hello\n");
    corpus_profile()
        .arg(file.path())
        .args(["--keep-case", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Hello\""))
        .stdout(predicate::str::contains("\"hello\"").not());
}

#[test]
fn jsonl_rows_as_csv() {
    let file = corpus(".jsonl", "{\"text\": \"a b\"}\n\n{\"text\": \"\"}\n");
    corpus_profile()
        .arg(file.path())
        .args(["--field", "text", "--rows", "csv", "--no-charts", "--no-html-tags", "--no-special-chars"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "text length,tokens,is empty,whitespace fraction\n3,2,0,0.3333\n0,0,1,0.0000\n",
        ));
}

#[test]
fn json_output_parses() {
    let file = corpus(".tsv", "id\tbody\n1\tthe cat\n2\tthe dog\n");
    let output = corpus_profile()
        .arg(file.path())
        .args(["--field", "body", "--json"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["summary"]["tokens"], 4);
    assert_eq!(value["tokens"][0], serde_json::json!(["the", 2]));
}

#[test]
fn head_prints_first_units_only() {
    let file = corpus(".txt", "one\ntwo\nthree\n");
    corpus_profile()
        .arg(file.path())
        .args(["--head", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"two\""))
        .stdout(predicate::str::contains("three").not());
}

#[test]
fn options_file_disables_details() {
    let file = corpus(".txt", "a\n");
    let options = corpus(".yaml", "check_html_tags: false\ncheck_special_chars: false\ncheck_whitespace: false\n");
    corpus_profile()
        .arg(file.path())
        .arg("--config")
        .arg(options.path())
        .args(["--rows", "csv", "--no-charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text length,tokens,is empty\n1,1,0\n"));
}

#[test]
fn null_field_fails_with_position() {
    let file = corpus(".jsonl", "{\"text\": \"ok\"}\n{\"text\": null}\n");
    corpus_profile()
        .arg(file.path())
        .args(["--field", "text"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("#1"))
        .stderr(predicate::str::contains("null"));
}

#[test]
fn missing_input_fails() {
    corpus_profile()
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn tsv_without_field_is_rejected() {
    let file = corpus(".tsv", "id\ttext\n");
    corpus_profile()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--field"));
}
