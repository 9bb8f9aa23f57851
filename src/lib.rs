//! Facade crate for the bookbench scoring engine.
//!
//! This crate re-exports the domain types from `bookbench-core` and the
//! scoring and ranking entry points from `bookbench-scorer`.
//!
//! ```
//! use bookbench::{App, Book, GoldenSet, QueryCatalogue, ResultSet, rank_leaderboard};
//!
//! let apps = [App::new("kobo", "Kobo")];
//! let golden = [GoldenSet::new(1, vec![Book::new(1, "Circe", "Madeline Miller")])];
//! let results = [ResultSet::new("kobo", 1, vec![Book::new(1, "circe", "madeline miller")])];
//!
//! let board = rank_leaderboard(&apps, &results, &golden, &QueryCatalogue::new());
//! assert!((board.apps[0].percentage - 100.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]

pub use bookbench_core::{
    App, AppId, Book, GoldenSet, HIT_POINTS, MAX_POINTS_PER_BOOK, POSITION_BONUS_POINTS,
    QueryCatalogue, QueryMeta, ResultSet, ResultStatus, TOTAL_QUERIES, ValidationError,
    normalize, same_work, validate,
};

#[cfg(feature = "test-support")]
pub use bookbench_core::test_support;

pub use bookbench_scorer::{
    AppScoreReport, CategoryScore, Leaderboard, QueryScore, QueryScoreDetail, ScoreBand,
    percentage, rank_leaderboard, score_app, score_query,
};
