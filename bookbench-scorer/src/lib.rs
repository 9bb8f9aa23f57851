//! Scoring and leaderboard ranking for recorded search results.
//!
//! The crate is the single implementation of the scoring rules shared by
//! every caller:
//! - [`score_query`] compares one app's list with one golden list. Each
//!   golden book found earns a hit worth `1.0`, plus a position bonus worth
//!   `0.5` when the app placed it at the golden rank or better.
//! - [`aggregate_app`] runs the query scorer over every defined golden query
//!   for one app and rolls the results up per category.
//! - [`score_app`] wraps the aggregate in an [`AppScoreReport`] measured
//!   against the best possible score.
//! - [`rank_leaderboard`] scores every app, orders them by total score and
//!   assigns competition ranks where ties share a rank (`1, 1, 3`).
//!
//! Every function is pure: the three input collections are borrowed and
//! nothing is cached, so results must simply be recomputed when the inputs
//! change.
//!
//! # Examples
//!
//! ```
//! use bookbench_core::{App, Book, GoldenSet, QueryCatalogue, QueryMeta, ResultSet};
//! use bookbench_scorer::rank_leaderboard;
//!
//! let apps = vec![App::new("kindle", "Kindle"), App::new("kobo", "Kobo")];
//! let golden = vec![GoldenSet::new(1, vec![Book::new(1, "Dune", "Frank Herbert")])];
//! let results = vec![
//!     ResultSet::new("kindle", 1, vec![Book::new(1, "Dune", "Frank Herbert")]),
//!     ResultSet::new("kobo", 1, vec![Book::new(3, "dune", "frank herbert")]),
//! ];
//! let queries: QueryCatalogue = [QueryMeta::new(1, "genre")].into_iter().collect();
//!
//! let board = rank_leaderboard(&apps, &results, &golden, &queries);
//! assert_eq!(board.apps[0].app_name, "Kindle");
//! assert_eq!(board.apps[0].rank, Some(1));
//! assert!((board.apps[1].total_score - 1.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]

mod aggregate;
mod leaderboard;
mod percentage;
mod query;
mod report;

pub use aggregate::{AppAggregate, CategoryScore, QueryScore, aggregate_app};
pub use leaderboard::{Leaderboard, assign_competition_ranks, competition_ranks, rank_leaderboard};
pub use percentage::{ScoreBand, percentage};
pub use query::{QueryScoreDetail, score_query};
pub use report::{AppScoreReport, score_app};
