//! Score one app's list against one golden list.

use bookbench_core::{Book, HIT_POINTS, POSITION_BONUS_POINTS, count_as_f64, max_score_for_books};
use serde::{Deserialize, Serialize};

/// Outcome of comparing a recorded list with a golden list.
///
/// Invariants: `position_bonuses <= hits <= golden_count`,
/// `score == hits + 0.5 * position_bonuses` and
/// `max_score == 1.5 * golden_count`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryScoreDetail {
    /// Golden books found in the recorded list.
    pub hits: usize,
    /// Hits placed at the golden rank or better.
    pub position_bonuses: usize,
    /// Points earned.
    pub score: f64,
    /// Points available.
    pub max_score: f64,
    /// Number of books in the golden list.
    pub golden_count: usize,
}

impl QueryScoreDetail {
    /// Detail for a query whose golden list has `golden_count` books and
    /// which earned nothing.
    #[must_use]
    pub fn unanswered(golden_count: usize) -> Self {
        Self {
            max_score: max_score_for_books(golden_count),
            golden_count,
            ..Self::default()
        }
    }
}

/// Score `result_books` against `golden_books`.
///
/// Golden books are visited in order. Each one looks for the *first* recorded
/// book with the same normalized title and author; the lookups are
/// independent, so a single recorded row can satisfy two golden rows that
/// name the same work. An empty golden list yields an all-zero detail.
///
/// # Examples
/// ```
/// use bookbench_core::Book;
/// use bookbench_scorer::score_query;
///
/// let golden = [Book::new(1, "Dune", "Frank Herbert")];
/// let detail = score_query(&[Book::new(3, "Dune", "Frank Herbert")], &golden);
/// assert_eq!((detail.hits, detail.position_bonuses), (1, 0));
/// assert!((detail.score - 1.0).abs() < f64::EPSILON);
/// assert!((detail.max_score - 1.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn score_query(result_books: &[Book], golden_books: &[Book]) -> QueryScoreDetail {
    if golden_books.is_empty() {
        return QueryScoreDetail::default();
    }
    let mut detail = QueryScoreDetail::unanswered(golden_books.len());
    if result_books.is_empty() {
        return detail;
    }

    for golden in golden_books {
        let Some(found) = result_books.iter().find(|book| book.is_same_work(golden)) else {
            continue;
        };
        detail.hits += 1;
        if found.ranks_at_or_above(golden) {
            detail.position_bonuses += 1;
        }
    }
    detail.score = points(detail.hits, detail.position_bonuses);
    detail
}

#[expect(
    clippy::float_arithmetic,
    reason = "scores weight hit and bonus counts"
)]
fn points(hits: usize, position_bonuses: usize) -> f64 {
    count_as_f64(hits) * HIT_POINTS + count_as_f64(position_bonuses) * POSITION_BONUS_POINTS
}
