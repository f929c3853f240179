//! End-to-end conversion tests.
//!
//! These tests run the full pipeline through `convert_file` against real
//! files in a temp directory: encoding detection, decoding, row parsing,
//! record building, and emission.

use std::io::Write;
use std::path::{Path, PathBuf};

use loadfile::convert::{convert_file, OutputFormat};
use loadfile::error::LoadfileError;

/// Writes raw bytes to `<dir>/<name>` and returns the path.
fn write_source(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path
}

#[test]
fn converts_basic_loadfile_to_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "EXPORT.DAT",
        "A\u{14}B\u{14}C\nþ1þ\u{14}þ2þ\u{14}þ3þ\n".as_bytes(),
    );

    let summary = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.columns, 3);

    let content = std::fs::read_to_string(temp_dir.path().join("EXPORT.DAT.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["A,B,C", "1,2,3"]);
}

#[test]
fn converts_basic_loadfile_to_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "EXPORT.DAT",
        "A\u{14}B\u{14}C\nþ1þ\u{14}þ2þ\u{14}þ3þ\n".as_bytes(),
    );

    convert_file(&source, temp_dir.path(), OutputFormat::Json, None).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("EXPORT.DAT.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, serde_json::json!([{"A": "1", "B": "2", "C": "3"}]));
    // Pretty-printed with 4-space indentation, keys sorted
    assert!(content.contains("\n    {"));
    assert!(content.contains("\n        \"A\": \"1\""));
}

#[test]
fn record_count_and_key_set_match_header() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "docs.dat",
        concat!(
            "DOCID\u{14}CUSTODIAN\u{14}SUBJECT\n",
            "þD001þ\u{14}þSmith, Janeþ\u{14}þRe: budgetþ\n",
            "þD002þ\u{14}þChen, Weiþ\u{14}þþ\n",
            "þD003þ\u{14}þþ\u{14}þFwd: noticeþ\n",
        )
        .as_bytes(),
    );

    convert_file(&source, temp_dir.path(), OutputFormat::Json, None).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("docs.dat.json")).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 3);
    for record in &parsed {
        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["CUSTODIAN", "DOCID", "SUBJECT"]);
    }
    assert_eq!(parsed[1]["SUBJECT"], "");
    assert_eq!(parsed[2]["CUSTODIAN"], "");
}

#[test]
fn csv_quotes_embedded_commas_and_quotes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "docs.dat",
        "NAME\u{14}TITLE\nþSmith, Janeþ\u{14}þthe \"final\" draftþ\n".as_bytes(),
    );

    convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("docs.dat.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "NAME,TITLE");
    assert_eq!(lines[1], "\"Smith, Jane\",\"the \"\"final\"\" draft\"");
}

#[test]
fn windows_1252_source_decodes_and_strips_wrappers() {
    let temp_dir = tempfile::tempdir().unwrap();
    // "RÉSUMÉ" in windows-1252, þ-wrapped cells
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        b"NAME\x14NOTE\n\xFER\xC9SUM\xC9\xFE\x14\xFEvalue\xFE\n",
    );

    let summary = convert_file(
        &source,
        temp_dir.path(),
        OutputFormat::Csv,
        Some(encoding_rs::WINDOWS_1252),
    )
    .unwrap();
    assert_eq!(summary.encoding, "windows-1252");

    let content = std::fs::read_to_string(temp_dir.path().join("export.dat.csv")).unwrap();
    assert!(content.contains("RÉSUMÉ"));
    // Wrapper bytes were stripped, not leaked into the output
    assert!(!content.contains('þ'));
}

#[test]
fn detection_never_picks_utf8_for_invalid_utf8() {
    let temp_dir = tempfile::tempdir().unwrap();
    // 0xFE is never valid UTF-8, so the detector must fall back to a
    // single-byte guess; under any of those the conversion succeeds and
    // the wrapper byte decodes to a single character that gets stripped.
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        b"A\x14B\n\xFE1\xFE\x14\xFE2\xFE\n",
    );

    let summary = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();
    assert_ne!(summary.encoding, "UTF-8");
    assert_eq!(summary.records, 1);
}

#[test]
fn undecodable_bytes_are_escaped_not_dropped() {
    let temp_dir = tempfile::tempdir().unwrap();
    // Force UTF-8 so the stray 0x80 continuation byte is unmappable.
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        b"A\x14B\nbad \x80 cell\x14ok\n",
    );

    convert_file(
        &source,
        temp_dir.path(),
        OutputFormat::Csv,
        Some(encoding_rs::UTF_8),
    )
    .unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("export.dat.csv")).unwrap();
    assert!(content.contains("bad \\x80 cell"));
}

#[test]
fn blank_lines_are_excluded_from_header_and_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        "\nA\u{14}B\n1\u{14}2\n\n3\u{14}4\n\n".as_bytes(),
    );

    let summary = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();
    assert_eq!(summary.records, 2);

    let content = std::fs::read_to_string(temp_dir.path().join("export.dat.csv")).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["A,B", "1,2", "3,4"]);
}

#[test]
fn source_directory_reports_error_and_creates_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source_dir = temp_dir.path().join("not_a_file");
    std::fs::create_dir(&source_dir).unwrap();

    let err = convert_file(&source_dir, temp_dir.path(), OutputFormat::Csv, None).unwrap_err();
    assert!(matches!(err, LoadfileError::NotAFile(_)));

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("not_a_file")]);
}

#[test]
fn missing_source_reports_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("ghost.dat");

    let err = convert_file(&missing, temp_dir.path(), OutputFormat::Json, None).unwrap_err();
    assert!(matches!(err, LoadfileError::NotAFile(_)));
    assert!(!temp_dir.path().join("ghost.dat.json").exists());
}

#[test]
fn ragged_table_aborts_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        "A\u{14}B\u{14}C\n1\u{14}2\u{14}3\n1\u{14}2\n".as_bytes(),
    );

    let err = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap_err();
    assert!(matches!(err, LoadfileError::ColumnCountMismatch { .. }));
    assert!(!temp_dir.path().join("export.dat.csv").exists());
}

#[test]
fn single_column_header_aborts_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(temp_dir.path(), "export.dat", b"NOT_DELIMITED\nvalue\n");

    let err = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap_err();
    assert!(matches!(err, LoadfileError::MalformedTable(_)));
    assert!(!temp_dir.path().join("export.dat.csv").exists());
}

#[test]
fn header_only_loadfile_to_json_is_empty_array() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(temp_dir.path(), "export.dat", "A\u{14}B\n".as_bytes());

    let summary = convert_file(&source, temp_dir.path(), OutputFormat::Json, None).unwrap();
    assert_eq!(summary.records, 0);

    let content = std::fs::read_to_string(temp_dir.path().join("export.dat.json")).unwrap();
    assert_eq!(content, "[]");
}

#[test]
fn header_only_loadfile_to_csv_is_no_records_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(temp_dir.path(), "export.dat", "A\u{14}B\n".as_bytes());

    let err = convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap_err();
    assert!(matches!(err, LoadfileError::NoRecords));
}

#[test]
fn destination_file_is_overwritten() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(temp_dir.path(), "export.dat", "A\u{14}B\n1\u{14}2\n".as_bytes());
    let dest = temp_dir.path().join("export.dat.csv");
    std::fs::write(&dest, "stale").unwrap();

    convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();
    let content = std::fs::read_to_string(&dest).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.starts_with("A,B"));
}

#[test]
fn crlf_terminated_loadfile_converts_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_source(
        temp_dir.path(),
        "export.dat",
        "A\u{14}B\r\nþ1þ\u{14}þ2þ\r\n\r\n".as_bytes(),
    );

    convert_file(&source, temp_dir.path(), OutputFormat::Csv, None).unwrap();
    let content = std::fs::read_to_string(temp_dir.path().join("export.dat.csv")).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["A,B", "1,2"]);
}
