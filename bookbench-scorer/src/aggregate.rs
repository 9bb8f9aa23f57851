//! Roll query scores up for a single app.

use std::collections::BTreeMap;

use bookbench_core::{GoldenSet, QueryCatalogue, ResultSet, defined_golden_sets};
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{QueryScoreDetail, percentage, score_query};

/// Totals for one query category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Points earned across the category.
    pub total_score: f64,
    /// Points available across the category.
    pub max_score: f64,
    /// Golden queries counted in the category.
    pub queries_scored: usize,
    /// `total_score` as a percentage of `max_score`, one decimal place.
    pub percentage: f64,
}

impl CategoryScore {
    #[expect(
        clippy::float_arithmetic,
        reason = "category totals accumulate query scores"
    )]
    fn record(&mut self, detail: &QueryScoreDetail) {
        self.total_score += detail.score;
        self.max_score += detail.max_score;
        self.queries_scored += 1;
    }

    fn finish(&mut self) {
        self.percentage = percentage(self.total_score, self.max_score);
    }
}

/// Score detail for one golden query, tagged with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryScore {
    /// Query the detail belongs to.
    pub query_index: u32,
    /// Category of the query, when catalogued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Query text, when catalogued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,
    /// Hits, bonuses and points.
    #[serde(flatten)]
    pub detail: QueryScoreDetail,
}

/// Per-app totals before they are measured against the leaderboard maximum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAggregate {
    /// Sum of every query score.
    pub total_score: f64,
    /// One entry per defined golden query, ascending by query index.
    pub query_scores: Vec<QueryScore>,
    /// Totals keyed by category name.
    pub category_scores: BTreeMap<String, CategoryScore>,
    /// Result sets holding at least one book, whether or not the query has a
    /// golden answer.
    pub queries_with_results: usize,
}

/// Score one app's result sets against every defined golden set.
///
/// `result_sets` should hold a single app's results with at most one set per
/// query; if an index repeats, the later set is used and a warning logged.
/// Golden sets without books are skipped. Queries missing from `queries`
/// still count toward `total_score` but join no category.
///
/// # Examples
/// ```
/// use bookbench_core::{Book, GoldenSet, QueryCatalogue, ResultSet};
/// use bookbench_scorer::aggregate_app;
///
/// let golden = vec![
///     GoldenSet::new(2, vec![Book::new(1, "Emma", "Jane Austen")]),
///     GoldenSet::new(1, vec![Book::new(1, "Dune", "Frank Herbert")]),
/// ];
/// let results = vec![ResultSet::new("kobo", 2, vec![Book::new(1, "Emma", "Jane Austen")])];
///
/// let aggregate = aggregate_app(&results, &golden, &QueryCatalogue::new());
/// assert!((aggregate.total_score - 1.5).abs() < f64::EPSILON);
/// assert_eq!(aggregate.query_scores[0].query_index, 1);
/// assert!(aggregate.category_scores.is_empty());
/// ```
#[must_use]
pub fn aggregate_app<'a, I>(
    result_sets: I,
    golden_sets: &[GoldenSet],
    queries: &QueryCatalogue,
) -> AppAggregate
where
    I: IntoIterator<Item = &'a ResultSet>,
{
    let (results_by_query, queries_with_results) = index_results(result_sets);
    let mut aggregate = AppAggregate {
        queries_with_results,
        ..AppAggregate::default()
    };

    for golden in defined_golden_sets(golden_sets) {
        let recorded = results_by_query
            .get(&golden.query_index)
            .map_or(&[][..], |result| result.books.as_slice());
        let detail = score_query(recorded, &golden.books);
        trace!(
            "query {}: {} hits, {} bonuses, {}/{}",
            golden.query_index, detail.hits, detail.position_bonuses, detail.score, detail.max_score
        );

        let meta = queries.get(golden.query_index);
        if let Some(query) = meta {
            aggregate
                .category_scores
                .entry(query.category.clone())
                .or_default()
                .record(&detail);
        }
        aggregate.add(QueryScore {
            query_index: golden.query_index,
            category: meta.map(|query| query.category.clone()),
            query_text: meta
                .filter(|query| !query.text.is_empty())
                .map(|query| query.text.clone()),
            detail,
        });
    }

    for category in aggregate.category_scores.values_mut() {
        category.finish();
    }
    aggregate
        .query_scores
        .sort_by_key(|entry| entry.query_index);
    aggregate
}

impl AppAggregate {
    #[expect(
        clippy::float_arithmetic,
        reason = "app totals accumulate query scores"
    )]
    fn add(&mut self, entry: QueryScore) {
        self.total_score += entry.detail.score;
        self.query_scores.push(entry);
    }
}

/// Key result sets by query index and count those holding books.
fn index_results<'a, I>(result_sets: I) -> (BTreeMap<u32, &'a ResultSet>, usize)
where
    I: IntoIterator<Item = &'a ResultSet>,
{
    let mut by_query = BTreeMap::new();
    let mut with_books = 0;
    for result in result_sets {
        if result.has_books() {
            with_books += 1;
        }
        if let Some(previous) = by_query.insert(result.query_index, result) {
            warn!(
                "app {} has several results for query {}; using the last one",
                previous.app_id, result.query_index
            );
        }
    }
    (by_query, with_books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbench_core::QueryMeta;
    use bookbench_core::test_support::{Snapshot, golden, recorded};
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    #[fixture]
    fn snapshot() -> Snapshot {
        Snapshot::sample()
    }

    fn results_for<'a>(
        snapshot: &'a Snapshot,
        app: &'a str,
    ) -> impl Iterator<Item = &'a ResultSet> {
        snapshot
            .result_sets
            .iter()
            .filter(move |result| result.app_id.as_str() == app)
    }

    #[rstest]
    #[case("alpha", 7.0, 4)]
    #[case("beta", 5.0, 4)]
    #[case("gamma", 5.0, 4)]
    fn totals_match_reference_dataset(
        snapshot: Snapshot,
        #[case] app: &str,
        #[case] total: f64,
        #[case] with_results: usize,
    ) {
        let aggregate = aggregate_app(
            results_for(&snapshot, app),
            &snapshot.golden_sets,
            &snapshot.queries,
        );
        assert!((aggregate.total_score - total).abs() < TOLERANCE);
        assert_eq!(aggregate.queries_with_results, with_results);
    }

    #[rstest]
    fn total_is_the_sum_of_query_scores(snapshot: Snapshot) {
        for app in ["alpha", "beta", "gamma"] {
            let aggregate = aggregate_app(
                results_for(&snapshot, app),
                &snapshot.golden_sets,
                &snapshot.queries,
            );
            let sum: f64 = aggregate
                .query_scores
                .iter()
                .map(|entry| entry.detail.score)
                .sum();
            assert!((aggregate.total_score - sum).abs() < TOLERANCE);
        }
    }

    #[rstest]
    fn undefined_golden_queries_are_not_reported(snapshot: Snapshot) {
        let aggregate = aggregate_app(
            results_for(&snapshot, "beta"),
            &snapshot.golden_sets,
            &snapshot.queries,
        );
        let indices: Vec<u32> = aggregate
            .query_scores
            .iter()
            .map(|entry| entry.query_index)
            .collect();
        assert_eq!(indices, vec![1, 2, 4, 5]);
    }

    #[rstest]
    fn uncatalogued_queries_skip_category_rollup(snapshot: Snapshot) {
        let aggregate = aggregate_app(
            results_for(&snapshot, "alpha"),
            &snapshot.golden_sets,
            &snapshot.queries,
        );
        let categorised: usize = aggregate
            .category_scores
            .values()
            .map(|category| category.queries_scored)
            .sum();
        assert_eq!(categorised, 3);
        let uncatalogued = aggregate
            .query_scores
            .iter()
            .find(|entry| entry.query_index == 4)
            .expect("query 4 is scored");
        assert!(uncatalogued.category.is_none());
        assert!((uncatalogued.detail.score - 1.5).abs() < TOLERANCE);
    }

    #[rstest]
    #[case("alpha", "genre", 4.5, 4.5, 100.0)]
    #[case("alpha", "mood", 1.0, 1.5, 66.7)]
    #[case("beta", "genre", 3.5, 4.5, 77.8)]
    #[case("gamma", "genre", 2.5, 4.5, 55.6)]
    fn category_buckets_carry_percentages(
        snapshot: Snapshot,
        #[case] app: &str,
        #[case] category: &str,
        #[case] total: f64,
        #[case] max: f64,
        #[case] expected_percentage: f64,
    ) {
        let aggregate = aggregate_app(
            results_for(&snapshot, app),
            &snapshot.golden_sets,
            &snapshot.queries,
        );
        let bucket = aggregate
            .category_scores
            .get(category)
            .expect("category bucket exists");
        assert!((bucket.total_score - total).abs() < TOLERANCE);
        assert!((bucket.max_score - max).abs() < TOLERANCE);
        assert!((bucket.percentage - expected_percentage).abs() < TOLERANCE);
    }

    #[rstest]
    fn query_scores_are_sorted_whatever_the_golden_order() {
        let golden_sets = vec![
            golden(9, &[(1, "Emma", "Jane Austen")]),
            golden(3, &[(1, "Dune", "Frank Herbert")]),
            golden(6, &[(1, "Circe", "Madeline Miller")]),
        ];
        let results = vec![recorded("kobo", 6, &[(1, "Circe", "Madeline Miller")])];
        let aggregate = aggregate_app(&results, &golden_sets, &QueryCatalogue::new());
        let indices: Vec<u32> = aggregate
            .query_scores
            .iter()
            .map(|entry| entry.query_index)
            .collect();
        assert_eq!(indices, vec![3, 6, 9]);
    }

    #[rstest]
    fn later_duplicate_result_wins() {
        let golden_sets = vec![golden(1, &[(1, "Dune", "Frank Herbert")])];
        let results = vec![
            recorded("kobo", 1, &[(1, "Dune", "Frank Herbert")]),
            recorded("kobo", 1, &[(4, "Dune", "Frank Herbert")]),
        ];
        let aggregate = aggregate_app(&results, &golden_sets, &QueryCatalogue::new());
        assert!((aggregate.total_score - 1.0).abs() < TOLERANCE);
        assert_eq!(aggregate.queries_with_results, 2);
    }

    #[rstest]
    fn empty_inputs_produce_an_empty_aggregate() {
        let aggregate = aggregate_app(std::iter::empty(), &[], &QueryCatalogue::new());
        assert_eq!(aggregate, AppAggregate::default());
    }

    #[rstest]
    fn query_text_is_carried_when_present() {
        let golden_sets = vec![golden(2, &[(1, "Emma", "Jane Austen")])];
        let queries: QueryCatalogue = [QueryMeta::new(2, "romance").with_text("regency comedies")]
            .into_iter()
            .collect();
        let aggregate = aggregate_app(std::iter::empty(), &golden_sets, &queries);
        let entry = aggregate.query_scores.first().expect("one entry");
        assert_eq!(entry.category.as_deref(), Some("romance"));
        assert_eq!(entry.query_text.as_deref(), Some("regency comedies"));
        let bucket = aggregate.category_scores.get("romance").expect("romance bucket");
        assert_eq!(bucket.queries_scored, 1);
        assert!(bucket.percentage.abs() < TOLERANCE);
    }
}
