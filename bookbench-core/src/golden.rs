//! Curated ground-truth lists and helpers for comparing against them.

use crate::{Book, MAX_POINTS_PER_BOOK};

/// The curated answer for one query.
///
/// A set without books stands for a query whose golden answer has not been
/// defined yet. Such sets are excluded from scoring everywhere.
///
/// # Examples
/// ```
/// use bookbench_core::{Book, GoldenSet};
///
/// let golden = GoldenSet::new(7, vec![Book::new(1, "Dune", "Frank Herbert")]);
/// assert!(golden.is_defined());
/// assert!((golden.max_score() - 1.5).abs() < f64::EPSILON);
/// assert!(!GoldenSet::new(8, Vec::new()).is_defined());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GoldenSet {
    /// Query this answer belongs to.
    pub query_index: u32,
    /// Expected books in golden order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub books: Vec<Book>,
}

impl GoldenSet {
    /// Construct a golden set.
    #[must_use]
    pub const fn new(query_index: u32, books: Vec<Book>) -> Self {
        Self { query_index, books }
    }

    /// Report whether the golden answer has at least one book.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.books.is_empty()
    }

    /// Best score an app can earn on this query.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        max_score_for_books(self.books.len())
    }
}

/// Best score available for a golden list holding `count` books.
#[expect(
    clippy::float_arithmetic,
    reason = "the maximum is a weighted count of golden books"
)]
#[must_use]
pub fn max_score_for_books(count: usize) -> f64 {
    count_as_f64(count) * MAX_POINTS_PER_BOOK
}

/// Widen a small count into the score domain.
#[expect(
    clippy::cast_precision_loss,
    reason = "counts are bounded by the size of the query bank and book lists"
)]
#[must_use]
pub const fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// Return the defined golden sets ordered by ascending query index.
///
/// The sort is stable, so sets sharing an index keep their input order.
#[must_use]
pub fn defined_golden_sets(golden_sets: &[GoldenSet]) -> Vec<&GoldenSet> {
    let mut defined: Vec<&GoldenSet> = golden_sets
        .iter()
        .filter(|golden| golden.is_defined())
        .collect();
    defined.sort_by_key(|golden| golden.query_index);
    defined
}

/// Sum of the maximum scores across all defined golden sets.
#[must_use]
pub fn max_possible_score(golden_sets: &[GoldenSet]) -> f64 {
    golden_sets
        .iter()
        .filter(|golden| golden.is_defined())
        .map(GoldenSet::max_score)
        .sum()
}

/// Report whether `book` matches any entry in `golden_books`.
#[must_use]
pub fn is_golden_match(book: &Book, golden_books: &[Book]) -> bool {
    golden_books.iter().any(|golden| golden.is_same_work(book))
}

/// Count the rows of `result_books` that match some golden book.
///
/// Repeated rows are counted individually. This backs side-by-side views and
/// is not used when computing scores.
#[must_use]
pub fn count_golden_matches(result_books: &[Book], golden_books: &[Book]) -> usize {
    result_books
        .iter()
        .filter(|book| is_golden_match(book, golden_books))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn golden_books() -> Vec<Book> {
        vec![
            Book::new(1, "Dune", "Frank Herbert"),
            Book::new(2, "Hyperion", "Dan Simmons"),
        ]
    }

    #[rstest]
    fn defined_sets_are_filtered_and_sorted() {
        let sets = vec![
            GoldenSet::new(9, vec![Book::new(1, "A", "B")]),
            GoldenSet::new(2, Vec::new()),
            GoldenSet::new(3, vec![Book::new(1, "C", "D")]),
        ];
        let indices: Vec<u32> = defined_golden_sets(&sets)
            .into_iter()
            .map(|golden| golden.query_index)
            .collect();
        assert_eq!(indices, vec![3, 9]);
    }

    #[rstest]
    fn max_possible_score_ignores_undefined_sets(golden_books: Vec<Book>) {
        let sets = vec![
            GoldenSet::new(1, golden_books),
            GoldenSet::new(2, Vec::new()),
            GoldenSet::new(3, vec![Book::new(1, "Emma", "Jane Austen")]),
        ];
        assert!((max_possible_score(&sets) - 4.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn counts_matches_including_repeats(golden_books: Vec<Book>) {
        let recorded = vec![
            Book::new(1, "dune", "frank herbert"),
            Book::new(2, "Dune", "Frank Herbert"),
            Book::new(3, "Sapiens", "Yuval Noah Harari"),
        ];
        assert_eq!(count_golden_matches(&recorded, &golden_books), 2);
    }

    #[rstest]
    fn nothing_matches_an_empty_golden_list() {
        let book = Book::new(1, "Dune", "Frank Herbert");
        assert!(!is_golden_match(&book, &[]));
    }
}
