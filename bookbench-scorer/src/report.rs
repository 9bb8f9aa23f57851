//! Per-app score reports measured against the best possible score.

use std::collections::BTreeMap;

use bookbench_core::{App, AppId, GoldenSet, QueryCatalogue, ResultSet, max_possible_score};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{AppAggregate, CategoryScore, QueryScore, ScoreBand, aggregate_app, percentage};

/// Everything known about one app's performance.
///
/// `rank` is only filled in when the report is part of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppScoreReport {
    /// App the report describes.
    pub app_id: AppId,
    /// Display name of the app.
    pub app_name: String,
    /// Points earned across all defined golden queries.
    pub total_score: f64,
    /// Points available across all defined golden queries.
    pub max_score: f64,
    /// `total_score` as a percentage of `max_score`, one decimal place.
    pub percentage: f64,
    /// Coarse label for `percentage`.
    pub band: ScoreBand,
    /// Number of defined golden queries.
    pub queries_scored: usize,
    /// Result sets recorded with at least one book.
    pub queries_with_results: usize,
    /// Totals keyed by category name.
    pub category_scores: BTreeMap<String, CategoryScore>,
    /// Per-query detail, ascending by query index.
    pub query_scores: Vec<QueryScore>,
    /// Competition rank within a leaderboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

impl AppScoreReport {
    fn from_aggregate(
        app: &App,
        aggregate: AppAggregate,
        max_score: f64,
        queries_scored: usize,
    ) -> Self {
        let share = percentage(aggregate.total_score, max_score);
        Self {
            app_id: app.id.clone(),
            app_name: app.name.clone(),
            total_score: aggregate.total_score,
            max_score,
            percentage: share,
            band: ScoreBand::from_percentage(share),
            queries_scored,
            queries_with_results: aggregate.queries_with_results,
            category_scores: aggregate.category_scores,
            query_scores: aggregate.query_scores,
            rank: None,
        }
    }
}

/// Build the standalone report for `app`.
///
/// `all_result_sets` may hold every app's results; only those recorded for
/// `app.id` are scored. The report carries no rank.
///
/// # Examples
/// ```
/// use bookbench_core::{App, Book, GoldenSet, QueryCatalogue, ResultSet};
/// use bookbench_scorer::{ScoreBand, score_app};
///
/// let app = App::new("libby", "Libby");
/// let golden = vec![
///     GoldenSet::new(1, vec![Book::new(1, "Dune", "Frank Herbert")]),
///     GoldenSet::new(2, Vec::new()),
/// ];
/// let results = vec![
///     ResultSet::new("libby", 1, vec![Book::new(1, "Dune", "Frank Herbert")]),
///     ResultSet::new("kobo", 1, Vec::new()),
/// ];
///
/// let report = score_app(&app, &results, &golden, &QueryCatalogue::new());
/// assert_eq!(report.queries_scored, 1);
/// assert_eq!(report.band, ScoreBand::Excellent);
/// assert!(report.rank.is_none());
/// ```
#[must_use]
pub fn score_app(
    app: &App,
    all_result_sets: &[ResultSet],
    golden_sets: &[GoldenSet],
    queries: &QueryCatalogue,
) -> AppScoreReport {
    let max_score = max_possible_score(golden_sets);
    let coverage = golden_sets.iter().filter(|golden| golden.is_defined()).count();
    score_app_against(app, all_result_sets, golden_sets, queries, max_score, coverage)
}

/// Score `app` when the leaderboard maximum and coverage are already known.
pub(crate) fn score_app_against(
    app: &App,
    all_result_sets: &[ResultSet],
    golden_sets: &[GoldenSet],
    queries: &QueryCatalogue,
    max_score: f64,
    coverage: usize,
) -> AppScoreReport {
    let own_results = all_result_sets
        .iter()
        .filter(|result| result.app_id == app.id);
    let aggregate = aggregate_app(own_results, golden_sets, queries);
    let report = AppScoreReport::from_aggregate(app, aggregate, max_score, coverage);
    debug!(
        "scored app {}: {}/{} ({}%)",
        report.app_id, report.total_score, report.max_score, report.percentage
    );
    report
}
