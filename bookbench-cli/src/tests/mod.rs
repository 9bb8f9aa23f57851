//! Shared test harness modules for the bookbench CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::dataset::{DatasetOverrides, DatasetPaths, load_dataset};
use crate::leaderboard::LeaderboardConfig;
use crate::report::ReportConfig;

mod dataset_unit;
mod helpers;
