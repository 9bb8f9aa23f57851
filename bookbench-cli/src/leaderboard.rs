//! Leaderboard command implementation for the bookbench CLI.

use std::io::Write;

use bookbench_scorer::{Leaderboard, rank_leaderboard};
use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetOverrides, DatasetPaths, load_dataset};
use crate::output::write_json;
use crate::{ARG_APPS, ARG_DATASET_DIR, ARG_GOLDEN, ARG_QUERIES, ARG_RESULTS, CliError};

/// CLI arguments for the `leaderboard` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every app in the dataset against the golden answers \
                 and print the ranked leaderboard as JSON. Dataset paths can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rank every app against the golden answers"
)]
#[ortho_config(prefix = "BOOKBENCH")]
pub(crate) struct LeaderboardArgs {
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

impl LeaderboardArgs {
    pub(crate) fn into_config(self) -> Result<LeaderboardConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(LeaderboardConfig::from(merged))
    }
}

/// Resolved `leaderboard` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeaderboardConfig {
    pub(crate) dataset: DatasetPaths,
}

impl From<LeaderboardArgs> for LeaderboardConfig {
    fn from(args: LeaderboardArgs) -> Self {
        let overrides = DatasetOverrides {
            dataset_dir: args.dataset_dir,
            golden: args.golden,
            results: args.results,
            queries: args.queries,
            apps: args.apps,
        };
        Self {
            dataset: DatasetPaths::from(overrides),
        }
    }
}

pub(crate) fn run_leaderboard(args: LeaderboardArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let leaderboard = execute_leaderboard(&config)?;
    write_json(writer, &leaderboard)
}

pub(crate) fn execute_leaderboard(config: &LeaderboardConfig) -> Result<Leaderboard, CliError> {
    config.dataset.validate_sources()?;
    let dataset = load_dataset(&config.dataset)?;
    let leaderboard = rank_leaderboard(
        &dataset.apps,
        &dataset.result_sets,
        &dataset.golden_sets,
        &dataset.queries,
    );
    info!(
        "ranked {} apps over {} golden queries",
        leaderboard.apps.len(),
        leaderboard.golden_coverage
    );
    Ok(leaderboard)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<LeaderboardConfig, CliError> {
    let merged = LeaderboardArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(LeaderboardConfig::from(merged))
}
