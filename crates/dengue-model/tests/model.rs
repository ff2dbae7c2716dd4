//! Tests for dengue-model types.

use std::fs;

use dengue_model::{JobConfig, JoinKey, JoinedGroup, OutputRow, Source};

#[test]
fn joined_group_values_by_source() {
    let mut group = JoinedGroup::new(JoinKey::new("CE", "2015-11"));
    group.values_mut(Source::Chuvas).push(38.2);
    group.values_mut(Source::Dengue).push(10.0);
    group.values_mut(Source::Dengue).push(2.0);

    assert_eq!(group.values(Source::Chuvas), &[38.2]);
    assert_eq!(group.values(Source::Dengue), &[10.0, 2.0]);
}

#[test]
fn source_names_match_cogroup_tags() {
    assert_eq!(Source::Chuvas.to_string(), "chuvas");
    assert_eq!(Source::Dengue.to_string(), "dengue");
    let json = serde_json::to_string(&Source::Dengue).expect("serialize source");
    assert_eq!(json, "\"dengue\"");
}

#[test]
fn output_row_fields_in_column_order() {
    let row = OutputRow {
        uf: "CE".to_string(),
        ano: "2015".to_string(),
        mes: "11".to_string(),
        chuva: "38.2".to_string(),
        dengue: "10.0".to_string(),
    };
    assert_eq!(row.fields(), ["CE", "2015", "11", "38.2", "10.0"]);
}

#[test]
fn join_key_serializes_as_plain_string() {
    let key = JoinKey::new("SP", "2016-01");
    let json = serde_json::to_string(&key).expect("serialize key");
    assert_eq!(json, "\"SP-2016-01\"");
    let round: JoinKey = serde_json::from_str(&json).expect("deserialize key");
    assert_eq!(round, key);
}

#[test]
fn config_loads_from_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("job.toml");
    fs::write(
        &path,
        "cases_path = \"in/casos.txt\"\noutput_delimiter = \",\"\nthreads = 2\n",
    )
    .expect("write config");

    let config = JobConfig::from_toml_file(&path).expect("load config");
    assert_eq!(config.cases_path.to_str(), Some("in/casos.txt"));
    assert_eq!(config.output_delimiter, ',');
    assert_eq!(config.threads, Some(2));
    assert_eq!(config.header, "UF;ANO;MES;CHUVA;DENGUE");
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = JobConfig::from_toml_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
