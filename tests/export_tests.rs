mod common;

use common::{StubServer, login_with_token, sx, temp_home, temp_out, write_input};
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::path::Path;

const PEOPLE: &str = r#"[
  {"id": "abc123", "name": "Alice", "status": "approved"},
  {"id": "xyz999", "name": "Bob", "status": "pending"}
]"#;

fn zip_entry(path: &str, entry: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip");
    let mut part = archive.by_name(entry).expect("entry present");
    let mut s = String::new();
    part.read_to_string(&mut s).expect("read entry");
    s
}

#[test]
fn test_xlsx_from_input_keeps_real_ids() {
    let home = temp_home("xlsx_input");
    let input = write_input("xlsx_input", PEOPLE);
    let out = temp_out("xlsx_input", "xlsx");

    sx(&home)
        .args([
            "report", "--input", &input, "--title", "People", "--out", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("XLSX export completed"));

    let strings = zip_entry(&out, "xl/sharedStrings.xml");
    assert!(strings.contains(">No<"));
    assert!(strings.contains("abc123"));
    assert!(strings.contains("Alice"));
    assert!(strings.contains("xyz999"));

    let sheet = zip_entry(&out, "xl/worksheets/sheet1.xml");
    // header row plus two records
    assert!(sheet.contains(r#"<row r="3""#));
    assert!(!sheet.contains(r#"<row r="4""#));
}

#[test]
fn test_csv_from_input_is_semicolon_quoted() {
    let home = temp_home("csv_input");
    let input = write_input(
        "csv_input",
        r#"[{"id": 7, "note": "say \"hi\"; bye"}]"#,
    );
    let out = temp_out("csv_input", "csv");

    sx(&home)
        .args([
            "report", "--input", &input, "--title", "Notes", "--format", "csv", "--out", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(
        content,
        "\"No\";\"id\";\"note\"\n\"1\";\"7\";\"say \"\"hi\"\"; bye\"\n"
    );
}

#[test]
fn test_json_from_input_applies_filters() {
    let home = temp_home("json_filter");
    let input = write_input("json_filter", PEOPLE);
    let out = temp_out("json_filter", "json");

    sx(&home)
        .args([
            "report", "--input", &input, "--title", "People", "--format", "json", "--status",
            "APPROVED", "--out", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let arr = v.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["name"], "Alice");
    assert_eq!(arr[0]["No"], 1);
}

#[test]
fn test_pdf_without_registered_layout_fails() {
    let home = temp_home("pdf_adhoc");
    let input = write_input("pdf_adhoc", PEOPLE);
    let out = temp_out("pdf_adhoc", "pdf");

    sx(&home)
        .args([
            "report", "--input", &input, "--title", "People", "--format", "pdf", "--out", &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No column layout registered"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_empty_dataset_warns_and_writes_nothing() {
    let home = temp_home("empty_input");
    let input = write_input("empty_input", "[]");
    let out = temp_out("empty_input", "xlsx");

    sx(&home)
        .args(["report", "--input", &input, "--title", "Nothing", "--out", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("No rows to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_empty_dataset_skips_pdf_too() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "sites") => (200, r#"{"data": []}"#.to_string()),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("empty_pdf");
    login_with_token(&home, "tok");
    let out = temp_out("empty_pdf", "pdf");

    sx(&home)
        .args([
            "--api", &server.base_url, "report", "--kind", "sites", "--format", "pdf", "--out",
            &out,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No rows to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_input_must_be_an_array() {
    let home = temp_home("bad_input");
    let input = write_input("bad_input", r#"{"id": 1}"#);

    sx(&home)
        .args(["report", "--input", &input, "--title", "Bad"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_filter_date_is_rejected() {
    let home = temp_home("bad_filter_date");
    let input = write_input("bad_filter_date", PEOPLE);

    sx(&home)
        .args([
            "report", "--input", &input, "--title", "People", "--date", "2025-13-40",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_pdf_for_kind_from_backend() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "occcurrences") => (
            200,
            r#"{"data": [
                {"id": 41, "category": {"name": "Theft"}, "site": "North Gate",
                 "user": {"name": "Ann"}, "date": "2025-03-01", "time": "08:30",
                 "status": "open", "description": "Broken lock"}
            ]}"#
            .to_string(),
        ),
        _ => (404, r#"{"message": "not found"}"#.to_string()),
    });

    let home = temp_home("pdf_kind");
    login_with_token(&home, "tok");
    let out = temp_out("pdf_kind", "pdf");

    sx(&home)
        .args([
            "--api", &server.base_url, "report", "--kind", "occurrences", "--format", "pdf",
            "--out", &out, "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_csv_for_kind_uses_report_file_name() {
    let server = StubServer::start(|method, path, _| match (method, path) {
        ("GET", "sites") => (
            200,
            r#"[{"id": 1, "name": "North Gate", "address": "1 Main St"}]"#.to_string(),
        ),
        _ => (404, "{}".to_string()),
    });

    let home = temp_home("csv_kind");
    login_with_token(&home, "tok");

    sx(&home)
        .current_dir(&home)
        .args(["--api", &server.base_url, "report", "--kind", "sites", "--format", "csv"])
        .assert()
        .success();

    let content = fs::read_to_string(home.join("sites_report.csv")).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("\"No\";\"ID\";\"Name\";\"Address\";\"Details\"")
    );
    assert_eq!(
        lines.next(),
        Some("\"1\";\"1\";\"North Gate\";\"1 Main St\";\"\"")
    );
}
