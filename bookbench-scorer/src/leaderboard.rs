//! Rank every app against the same golden answers.

use bookbench_core::{App, GoldenSet, QueryCatalogue, ResultSet, TOTAL_QUERIES, max_possible_score};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::AppScoreReport;
use crate::report::score_app_against;

/// Ranked reports plus the figures they were measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Best total any app could reach.
    pub max_possible_score: f64,
    /// Queries with a defined golden answer.
    pub golden_coverage: usize,
    /// Size of the query bank.
    pub total_queries: u32,
    /// Reports ordered by descending total score, each with a rank.
    pub apps: Vec<AppScoreReport>,
}

/// Score every app and order the reports by total score.
///
/// The sort is stable, so apps with equal totals keep their relative order
/// from `apps`. Ties share a competition rank and the next distinct score
/// skips ahead, giving `1, 1, 3`.
#[must_use]
pub fn rank_leaderboard(
    apps: &[App],
    all_result_sets: &[ResultSet],
    golden_sets: &[GoldenSet],
    queries: &QueryCatalogue,
) -> Leaderboard {
    let max_score = max_possible_score(golden_sets);
    let golden_coverage = golden_sets.iter().filter(|golden| golden.is_defined()).count();

    let mut reports: Vec<AppScoreReport> = apps
        .iter()
        .map(|app| {
            score_app_against(
                app,
                all_result_sets,
                golden_sets,
                queries,
                max_score,
                golden_coverage,
            )
        })
        .collect();
    reports.sort_by(|left, right| right.total_score.total_cmp(&left.total_score));
    assign_competition_ranks(&mut reports);

    debug!(
        "ranked {} apps over {golden_coverage} golden queries (max {max_score})",
        reports.len()
    );
    Leaderboard {
        max_possible_score: max_score,
        golden_coverage,
        total_queries: TOTAL_QUERIES,
        apps: reports,
    }
}

/// Competition ranks for scores already sorted in descending order.
///
/// Equal scores share a rank; a strictly lower score takes its one-based
/// position.
///
/// # Examples
/// ```
/// use bookbench_scorer::competition_ranks;
///
/// assert_eq!(competition_ranks(&[10.0, 10.0, 5.0]), vec![1, 1, 3]);
/// assert!(competition_ranks(&[]).is_empty());
/// ```
#[must_use]
pub fn competition_ranks(sorted_scores: &[f64]) -> Vec<usize> {
    let mut ranks: Vec<usize> = Vec::with_capacity(sorted_scores.len());
    let mut previous: Option<(f64, usize)> = None;
    for (position, &score) in sorted_scores.iter().enumerate() {
        let rank = match previous {
            Some((last_score, last_rank)) if score >= last_score => last_rank,
            _ => position + 1,
        };
        ranks.push(rank);
        previous = Some((score, rank));
    }
    ranks
}

/// Fill in `rank` on reports already sorted by descending total score.
pub fn assign_competition_ranks(reports: &mut [AppScoreReport]) {
    let scores: Vec<f64> = reports.iter().map(|report| report.total_score).collect();
    for (report, rank) in reports.iter_mut().zip(competition_ranks(&scores)) {
        report.rank = Some(rank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookbench_core::test_support::{Snapshot, golden, recorded};
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn snapshot() -> Snapshot {
        Snapshot::sample()
    }

    fn board(snapshot: &Snapshot) -> Leaderboard {
        rank_leaderboard(
            &snapshot.apps,
            &snapshot.result_sets,
            &snapshot.golden_sets,
            &snapshot.queries,
        )
    }

    #[rstest]
    #[case(&[10.0, 10.0, 5.0], &[1, 1, 3])]
    #[case(&[9.0, 8.0, 8.0, 7.0, 7.0, 7.0, 1.0], &[1, 2, 2, 4, 4, 4, 7])]
    #[case(&[3.0, 3.0, 3.0], &[1, 1, 1])]
    #[case(&[4.5], &[1])]
    #[case(&[], &[])]
    fn ties_share_a_rank(#[case] scores: &[f64], #[case] expected: &[usize]) {
        assert_eq!(competition_ranks(scores), expected);
    }

    #[rstest]
    fn reference_dataset_ranks_alpha_first(snapshot: Snapshot) {
        let leaderboard = board(&snapshot);
        let order: Vec<(&str, Option<usize>)> = leaderboard
            .apps
            .iter()
            .map(|report| (report.app_id.as_str(), report.rank))
            .collect();
        assert_eq!(
            order,
            vec![("alpha", Some(1)), ("beta", Some(2)), ("gamma", Some(2))]
        );
        assert!((leaderboard.max_possible_score - 7.5).abs() < 1e-9);
        assert_eq!(leaderboard.golden_coverage, 4);
        assert_eq!(leaderboard.total_queries, TOTAL_QUERIES);
    }

    #[rstest]
    fn tied_apps_keep_input_order(mut snapshot: Snapshot) {
        snapshot.apps.reverse();
        let leaderboard = board(&snapshot);
        let order: Vec<&str> = leaderboard
            .apps
            .iter()
            .map(|report| report.app_id.as_str())
            .collect();
        assert_eq!(order, vec!["alpha", "gamma", "beta"]);
    }

    #[rstest]
    fn apps_without_results_share_the_bottom_rank() {
        let apps = vec![
            App::new("kindle", "Kindle"),
            App::new("kobo", "Kobo"),
            App::new("libby", "Libby"),
        ];
        let golden_sets = vec![golden(1, &[(1, "Dune", "Frank Herbert")])];
        let results = vec![recorded("libby", 1, &[(2, "Dune", "Frank Herbert")])];
        let leaderboard = rank_leaderboard(&apps, &results, &golden_sets, &QueryCatalogue::new());
        let ranks: Vec<(&str, Option<usize>)> = leaderboard
            .apps
            .iter()
            .map(|report| (report.app_id.as_str(), report.rank))
            .collect();
        assert_eq!(
            ranks,
            vec![("libby", Some(1)), ("kindle", Some(2)), ("kobo", Some(2))]
        );
    }

    #[rstest]
    fn no_apps_gives_an_empty_board(snapshot: Snapshot) {
        let leaderboard = rank_leaderboard(
            &[],
            &snapshot.result_sets,
            &snapshot.golden_sets,
            &snapshot.queries,
        );
        assert!(leaderboard.apps.is_empty());
        assert_eq!(leaderboard.golden_coverage, 4);
    }

    #[rstest]
    fn leaderboard_serialises_ranks(snapshot: Snapshot) {
        let json = serde_json::to_value(board(&snapshot)).expect("encode leaderboard");
        assert_eq!(json["goldenCoverage"], 4);
        assert_eq!(json["totalQueries"], 50);
        assert_eq!(json["apps"][2]["rank"], 2);
    }

    proptest! {
        #[test]
        fn ranks_are_consistent_with_scores(
            mut scores in prop::collection::vec(0_u8..=20, 0..16),
        ) {
            scores.sort_unstable_by(|a, b| b.cmp(a));
            let values: Vec<f64> = scores.iter().map(|&score| f64::from(score)).collect();
            let ranks = competition_ranks(&values);
            prop_assert_eq!(ranks.len(), values.len());
            for (position, (&rank, &score)) in ranks.iter().zip(&values).enumerate() {
                let higher = values.iter().filter(|&&other| other > score).count();
                prop_assert_eq!(rank, higher + 1);
                prop_assert!(rank <= position + 1);
            }
        }
    }
}
