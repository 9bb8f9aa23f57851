//! Report command implementation for the bookbench CLI.

use std::io::Write;

use bookbench_core::AppId;
use bookbench_scorer::{AppScoreReport, score_app};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetOverrides, DatasetPaths, load_dataset};
use crate::output::write_json;
use crate::{
    ARG_APP_ID, ARG_APPS, ARG_DATASET_DIR, ARG_GOLDEN, ARG_QUERIES, ARG_RESULTS, CliError,
    ENV_REPORT_APP_ID,
};

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a single app against the golden answers and print its \
                 report as JSON, with per-query and per-category detail.",
    about = "Score one app against the golden answers"
)]
#[ortho_config(prefix = "BOOKBENCH")]
pub(crate) struct ReportArgs {
    /// Identifier of the app to report on.
    #[arg(value_name = ARG_APP_ID)]
    #[serde(default)]
    pub(crate) app_id: Option<String>,
    /// Directory holding the default dataset filenames.
    #[arg(long = ARG_DATASET_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) dataset_dir: Option<Utf8PathBuf>,
    /// Override the path to the golden answers (`golden.json`).
    #[arg(long = ARG_GOLDEN, value_name = "path")]
    #[serde(default)]
    pub(crate) golden: Option<Utf8PathBuf>,
    /// Override the path to the recorded results (`results.json`).
    #[arg(long = ARG_RESULTS, value_name = "path")]
    #[serde(default)]
    pub(crate) results: Option<Utf8PathBuf>,
    /// Override the path to the query metadata (`queries.json`).
    #[arg(long = ARG_QUERIES, value_name = "path")]
    #[serde(default)]
    pub(crate) queries: Option<Utf8PathBuf>,
    /// Override the path to the app registry (`apps.json`).
    #[arg(long = ARG_APPS, value_name = "path")]
    #[serde(default)]
    pub(crate) apps: Option<Utf8PathBuf>,
}

impl ReportArgs {
    pub(crate) fn into_config(self) -> Result<ReportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReportConfig::try_from(merged)
    }
}

/// Resolved `report` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportConfig {
    pub(crate) app_id: AppId,
    pub(crate) dataset: DatasetPaths,
}

impl TryFrom<ReportArgs> for ReportConfig {
    type Error = CliError;

    fn try_from(args: ReportArgs) -> Result<Self, Self::Error> {
        let app_id = args
            .app_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_APP_ID,
                env: ENV_REPORT_APP_ID,
            })?;
        let overrides = DatasetOverrides {
            dataset_dir: args.dataset_dir,
            golden: args.golden,
            results: args.results,
            queries: args.queries,
            apps: args.apps,
        };
        Ok(Self {
            app_id: AppId::new(app_id),
            dataset: DatasetPaths::from(overrides),
        })
    }
}

pub(crate) fn run_report(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_report(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_report(config: &ReportConfig) -> Result<AppScoreReport, CliError> {
    config.dataset.validate_sources()?;
    let dataset = load_dataset(&config.dataset)?;
    let app = dataset
        .find_app(config.app_id.as_str())
        .ok_or_else(|| CliError::UnknownApp {
            app_id: config.app_id.clone(),
        })?;
    let report = score_app(
        app,
        &dataset.result_sets,
        &dataset.golden_sets,
        &dataset.queries,
    );
    info!(
        "{} scored {} of {} ({}%)",
        report.app_name, report.total_score, report.max_score, report.percentage
    );
    Ok(report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ReportConfig, CliError> {
    let merged = ReportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ReportConfig::try_from(merged)
}
