//! Unit tests for reading dataset files from disk.

use super::helpers::{SampleDataset, write_utf8};
use super::*;
use bookbench_core::ValidationError;
use rstest::{fixture, rstest};

#[fixture]
fn sample() -> SampleDataset {
    SampleDataset::new()
}

fn paths_in(sample: &SampleDataset) -> DatasetPaths {
    DatasetPaths::from(DatasetOverrides {
        dataset_dir: Some(sample.root().to_path_buf()),
        ..DatasetOverrides::default()
    })
}

#[rstest]
fn loads_and_orders_apps_by_name(sample: SampleDataset) {
    write_utf8(
        &sample.path("apps.json"),
        br#"[{"id":"zz","name":"Zebra"},{"id":"aa","name":"Aardvark"}]"#,
    );
    let dataset = load_dataset(&paths_in(&sample)).expect("dataset should load");
    let names: Vec<&str> = dataset.apps.iter().map(|app| app.name.as_str()).collect();
    assert_eq!(names, vec!["Aardvark", "Zebra"]);
    assert_eq!(dataset.golden_sets.len(), 5);
    assert_eq!(dataset.queries.len(), 4);
}

#[rstest]
fn finds_apps_by_identifier(sample: SampleDataset) {
    let dataset = load_dataset(&paths_in(&sample)).expect("dataset should load");
    assert_eq!(
        dataset.find_app("beta").map(|app| app.name.as_str()),
        Some("Beta")
    );
    assert!(dataset.find_app("delta").is_none());
}

#[rstest]
#[case::golden("golden.json", ARG_GOLDEN)]
#[case::results("results.json", ARG_RESULTS)]
#[case::queries("queries.json", ARG_QUERIES)]
#[case::apps("apps.json", ARG_APPS)]
fn validate_sources_reports_missing_files(
    sample: SampleDataset,
    #[case] file: &str,
    #[case] expected_field: &'static str,
) {
    std::fs::remove_file(sample.path(file).as_std_path()).expect("remove dataset file");
    let err = paths_in(&sample)
        .validate_sources()
        .expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories(sample: SampleDataset) {
    let golden = sample.path("golden.json");
    std::fs::remove_file(golden.as_std_path()).expect("remove golden file");
    std::fs::create_dir(golden.as_std_path()).expect("golden directory");

    let err = paths_in(&sample)
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_GOLDEN);
            assert_eq!(path, golden);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_json_names_the_file(sample: SampleDataset) {
    let results = sample.path("results.json");
    write_utf8(&results, b"[{ not valid json");
    let err = load_dataset(&paths_in(&sample)).expect_err("invalid json should error");
    match err {
        CliError::ParseDataset { path, .. } => assert_eq!(path, results),
        other => panic!("expected ParseDataset, found {other:?}"),
    }
}

#[rstest]
fn invalid_records_are_rejected_before_scoring(sample: SampleDataset) {
    let golden = sample.path("golden.json");
    write_utf8(
        &golden,
        br#"[{"queryIndex":51,"books":[{"rank":1,"title":"Dune","author":"Frank Herbert"}]}]"#,
    );
    let err = load_dataset(&paths_in(&sample)).expect_err("out of range index should error");
    match err {
        CliError::InvalidDataset { path, source } => {
            assert_eq!(path, golden);
            assert_eq!(source, ValidationError::QueryIndexOutOfRange { index: 51 });
        }
        other => panic!("expected InvalidDataset, found {other:?}"),
    }
}

#[rstest]
fn duplicate_results_are_rejected(sample: SampleDataset) {
    let results = sample.path("results.json");
    write_utf8(
        &results,
        br#"[
            {"appId":"alpha","queryIndex":1,"books":[]},
            {"appId":"alpha","queryIndex":1,"books":[]}
        ]"#,
    );
    let err = load_dataset(&paths_in(&sample)).expect_err("duplicate result should error");
    match err {
        CliError::InvalidDataset { source, .. } => assert!(matches!(
            source,
            ValidationError::DuplicateResult { query_index: 1, .. }
        )),
        other => panic!("expected InvalidDataset, found {other:?}"),
    }
}
