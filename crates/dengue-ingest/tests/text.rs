//! Tests for reading input files and splitting their lines.

use std::fs;

use proptest::prelude::*;

use dengue_ingest::{SourceLine, parse, read_lines};
use dengue_model::JoinError;

#[test]
fn skips_header_and_numbers_lines_from_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chuvas.csv");
    fs::write(&path, "data,mm,uf\n2015-11-05,38.2,CE\n2015-11-06,1.0,CE\n").expect("write");

    let lines = read_lines(&path, 1).expect("read lines");
    assert_eq!(
        lines,
        vec![
            SourceLine {
                number: 2,
                text: "2015-11-05,38.2,CE".to_string()
            },
            SourceLine {
                number: 3,
                text: "2015-11-06,1.0,CE".to_string()
            },
        ]
    );
}

#[test]
fn strips_crlf_terminators() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("chuvas.csv");
    fs::write(&path, "data,mm,uf\r\n2015-11-05,38.2,CE\r\n").expect("write");

    let lines = read_lines(&path, 1).expect("read lines");
    assert_eq!(lines.len(), 1);
    assert_eq!(parse(&lines[0].text, ','), vec!["2015-11-05", "38.2", "CE"]);
}

#[test]
fn header_only_file_has_no_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("casos_dengue.txt");
    fs::write(&path, "id|data_iniSE|casos\n").expect("write");

    assert!(read_lines(&path, 1).expect("read lines").is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_lines(&dir.path().join("nope.txt"), 1).unwrap_err();
    assert!(matches!(err, JoinError::Io { .. }));
}

proptest! {
    #[test]
    fn parse_inverts_join(fields in prop::collection::vec("[^|]{0,8}", 1..12)) {
        let line = fields.join("|");
        prop_assert_eq!(parse(&line, '|'), fields);
    }
}
