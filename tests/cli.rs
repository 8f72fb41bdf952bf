use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

const DOC: &str = "The cat sat. Cat cat cat. Dog ran fast.";

fn write_doc(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

fn basesum() -> Command {
    let mut cmd = Command::cargo_bin("basesum").unwrap();
    cmd.env_remove("BASESUM_NUM_SENTENCES")
        .env_remove("BASESUM_LANGUAGE")
        .env_remove("BASESUM_BACKEND")
        .env_remove("BASESUM_STOPWORDS_FILE")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn prints_selected_sentences_one_per_line() {
    let doc = write_doc(DOC);
    let stop = write_doc("the\n");
    let out = basesum()
        .arg(doc.path())
        .args(["-n", "2", "--stopwords-file"])
        .arg(stop.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["Cat cat cat.", "Dog ran fast."]);
}

#[test]
fn json_output_carries_scores_and_diagnostics() {
    let doc = write_doc(DOC);
    let out = basesum()
        .arg(doc.path())
        .args(["-n", "10", "--format", "json", "--order", "document"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let sentences = v.get("sentences").and_then(|s| s.as_array()).unwrap();
    assert_eq!(sentences.len(), 3);
    let indexes: Vec<i64> = sentences
        .iter()
        .map(|s| s.get("index").and_then(|i| i.as_i64()).unwrap())
        .collect();
    assert_eq!(indexes, vec![0, 1, 2]);
    assert_eq!(v.get("requested").and_then(|x| x.as_i64()), Some(10));
    assert_eq!(v.get("corpus_size").and_then(|x| x.as_i64()), Some(3));
    assert!(v.get("average_tokens").and_then(|x| x.as_f64()).unwrap() > 0.0);
}

#[test]
fn reads_stdin_when_no_path_given() {
    let mut child = basesum()
        .args(["-n", "1", "--backend", "lead"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(DOC.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "The cat sat.");
}

#[test]
fn zero_sentences_prints_nothing() {
    let doc = write_doc(DOC);
    let out = basesum().arg(doc.path()).args(["-n", "0"]).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_document_fails() {
    let doc = write_doc("   \n");
    let out = basesum().arg(doc.path()).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no sentences"));
}

#[test]
fn document_of_only_stopwords_fails() {
    let doc = write_doc("The a. 42!");
    let out = basesum().arg(doc.path()).args(["--stopword", "a"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("filtered as invalid"));
}

#[test]
fn missing_file_fails() {
    let out = basesum().arg("/no/such/document.txt").output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("could not read"));
}

#[test]
fn unknown_language_fails_before_reading_input() {
    let out = basesum()
        .args(["--language", "xx", "/no/such/document.txt"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unsupported language"));
}
