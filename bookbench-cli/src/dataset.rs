//! Locating, reading and validating the four dataset files.

use std::io::{self, BufReader};

use bookbench_core::validate::{
    validate_apps, validate_golden_sets, validate_queries, validate_result_sets,
};
use bookbench_core::{App, GoldenSet, QueryCatalogue, QueryMeta, ResultSet, ValidationError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::info;
use serde::de::DeserializeOwned;

use crate::{ARG_APPS, ARG_GOLDEN, ARG_QUERIES, ARG_RESULTS, CliError};

const GOLDEN_FILE: &str = "golden.json";
const RESULTS_FILE: &str = "results.json";
const QUERIES_FILE: &str = "queries.json";
const APPS_FILE: &str = "apps.json";

/// Per-file overrides as they arrive from configuration.
#[derive(Debug, Clone, Default)]
pub(crate) struct DatasetOverrides {
    pub(crate) dataset_dir: Option<Utf8PathBuf>,
    pub(crate) golden: Option<Utf8PathBuf>,
    pub(crate) results: Option<Utf8PathBuf>,
    pub(crate) queries: Option<Utf8PathBuf>,
    pub(crate) apps: Option<Utf8PathBuf>,
}

/// Resolved locations of the dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatasetPaths {
    /// Golden answers (`golden.json`).
    pub(crate) golden: Utf8PathBuf,
    /// Recorded result sets (`results.json`).
    pub(crate) results: Utf8PathBuf,
    /// Query metadata (`queries.json`).
    pub(crate) queries: Utf8PathBuf,
    /// App registry (`apps.json`).
    pub(crate) apps: Utf8PathBuf,
}

impl From<DatasetOverrides> for DatasetPaths {
    fn from(overrides: DatasetOverrides) -> Self {
        let dir = overrides
            .dataset_dir
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            golden: overrides.golden.unwrap_or_else(|| dir.join(GOLDEN_FILE)),
            results: overrides.results.unwrap_or_else(|| dir.join(RESULTS_FILE)),
            queries: overrides.queries.unwrap_or_else(|| dir.join(QUERIES_FILE)),
            apps: overrides.apps.unwrap_or_else(|| dir.join(APPS_FILE)),
        }
    }
}

impl DatasetPaths {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.golden, ARG_GOLDEN)?;
        Self::require_existing(&self.results, ARG_RESULTS)?;
        Self::require_existing(&self.queries, ARG_QUERIES)?;
        Self::require_existing(&self.apps, ARG_APPS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// The four input collections, validated.
///
/// Apps are ordered by name so that tied apps list alphabetically.
#[derive(Debug, Clone)]
pub(crate) struct Dataset {
    pub(crate) apps: Vec<App>,
    pub(crate) golden_sets: Vec<GoldenSet>,
    pub(crate) result_sets: Vec<ResultSet>,
    pub(crate) queries: QueryCatalogue,
}

impl Dataset {
    pub(crate) fn find_app(&self, app_id: &str) -> Option<&App> {
        self.apps.iter().find(|app| app.id.as_str() == app_id)
    }
}

/// Read every dataset file and reject malformed records.
pub(crate) fn load_dataset(paths: &DatasetPaths) -> Result<Dataset, CliError> {
    let mut apps: Vec<App> = load_validated(&paths.apps, validate_apps)?;
    let golden_sets: Vec<GoldenSet> = load_validated(&paths.golden, validate_golden_sets)?;
    let result_sets: Vec<ResultSet> = load_validated(&paths.results, validate_result_sets)?;
    let queries: Vec<QueryMeta> = load_validated(&paths.queries, validate_queries)?;

    apps.sort_by(|left, right| left.name.cmp(&right.name));
    info!(
        "loaded {} apps, {} golden sets, {} result sets and {} queries",
        apps.len(),
        golden_sets.len(),
        result_sets.len(),
        queries.len()
    );
    Ok(Dataset {
        apps,
        golden_sets,
        result_sets,
        queries: queries.into_iter().collect(),
    })
}

fn load_validated<T: DeserializeOwned>(
    path: &Utf8Path,
    validate: fn(&[T]) -> Result<(), ValidationError>,
) -> Result<Vec<T>, CliError> {
    let records: Vec<T> = load_json(path)?;
    validate(&records).map_err(|source| CliError::InvalidDataset {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records)
}

/// Decode a JSON document from `path`.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseDataset {
        path: path.to_path_buf(),
        source,
    })
}

fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
