//! Core domain types for the bookbench scoring engine.
//!
//! The crate models the three input collections the engine consumes:
//! curated [`GoldenSet`]s, the [`ResultSet`]s recorded for each [`App`], and
//! the [`QueryCatalogue`] that buckets queries by category. It also owns the
//! string [`normalize`] rule that decides when two books are the same work.
//!
//! The types carry no behaviour that can fail during scoring. Validation of
//! operator input lives in [`validate`] and is applied by the write path
//! before data reaches the scorer.
//!
//! # Examples
//!
//! ```
//! use bookbench_core::{Book, GoldenSet, is_golden_match};
//!
//! let golden = GoldenSet::new(1, vec![Book::new(1, "Gone Girl's", "Gillian Flynn")]);
//! let recorded = Book::new(4, "gone girl\u{2019}s", "GILLIAN FLYNN");
//! assert!(is_golden_match(&recorded, &golden.books));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod app;
mod book;
mod golden;
pub mod normalize;
mod query;
mod result;
pub mod validate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use app::{App, AppId};
pub use book::Book;
pub use golden::{
    GoldenSet, count_as_f64, count_golden_matches, defined_golden_sets, is_golden_match,
    max_possible_score, max_score_for_books,
};
pub use normalize::{normalize, same_work};
pub use query::{QueryCatalogue, QueryMeta};
pub use result::{ResultSet, ResultStatus};
pub use validate::ValidationError;

/// Number of queries in the benchmark bank.
pub const TOTAL_QUERIES: u32 = 50;

/// Largest number of books an operator may record for one query.
pub const MAX_BOOKS_PER_LIST: usize = 9;

/// Largest rank an operator may assign to a book.
pub const MAX_RANK: u32 = 9;

/// Points awarded for each golden book found in an app's list.
pub const HIT_POINTS: f64 = 1.0;

/// Extra points awarded when a hit appears at the golden rank or better.
pub const POSITION_BONUS_POINTS: f64 = 0.5;

/// Best possible score contributed by a single golden book.
pub const MAX_POINTS_PER_BOOK: f64 = 1.5;
