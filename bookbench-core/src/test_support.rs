//! Builders and a small reference dataset shared by unit, behaviour and
//! benchmark code.
//!
//! Entries are written as `(rank, title, author)` tuples to keep fixtures
//! short.

use crate::{App, Book, GoldenSet, QueryCatalogue, QueryMeta, ResultSet};

/// Build a book list from `(rank, title, author)` tuples.
#[must_use]
pub fn books(entries: &[(u32, &str, &str)]) -> Vec<Book> {
    entries
        .iter()
        .map(|&(rank, title, author)| Book::new(rank, title, author))
        .collect()
}

/// Build a golden set for `query_index`.
#[must_use]
pub fn golden(query_index: u32, entries: &[(u32, &str, &str)]) -> GoldenSet {
    GoldenSet::new(query_index, books(entries))
}

/// Build a result set recorded for `app_id`.
#[must_use]
pub fn recorded(app_id: &str, query_index: u32, entries: &[(u32, &str, &str)]) -> ResultSet {
    ResultSet::new(app_id, query_index, books(entries))
}

/// The four input collections in one bundle.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Apps in presentation order.
    pub apps: Vec<App>,
    /// Golden answers, including undefined placeholders.
    pub golden_sets: Vec<GoldenSet>,
    /// Results recorded for every app.
    pub result_sets: Vec<ResultSet>,
    /// Query metadata.
    pub queries: QueryCatalogue,
}

impl Snapshot {
    /// Reference dataset with three apps and five queries.
    ///
    /// - Query 3 has an undefined golden answer.
    /// - Query 4 has a golden answer but no metadata.
    /// - `beta` and `gamma` tie on 5.0; `alpha` leads with 7.0 out of 7.5.
    #[must_use]
    pub fn sample() -> Self {
        let apps = vec![
            App::new("alpha", "Alpha"),
            App::new("beta", "Beta"),
            App::new("gamma", "Gamma"),
        ];
        let golden_sets = vec![
            golden(
                1,
                &[(1, "Dune", "Frank Herbert"), (2, "Hyperion", "Dan Simmons")],
            ),
            golden(2, &[(1, "Emma", "Jane Austen")]),
            golden(3, &[]),
            golden(4, &[(1, "Sapiens", "Yuval Noah Harari")]),
            golden(5, &[(1, "Circe", "Madeline Miller")]),
        ];
        let result_sets = vec![
            recorded(
                "alpha",
                1,
                &[(1, "Dune", "Frank Herbert"), (2, "Hyperion", "Dan Simmons")],
            ),
            recorded("alpha", 2, &[(1, "Emma", "Jane Austen")]),
            recorded("alpha", 4, &[(1, "Sapiens", "Yuval Noah Harari")]),
            recorded("alpha", 5, &[(2, "Circe", "Madeline Miller")]),
            recorded(
                "beta",
                1,
                &[(1, "Hyperion", "Dan Simmons"), (2, "Dune", "Frank Herbert")],
            ),
            recorded("beta", 2, &[(3, "Emma", "Jane Austen")]),
            recorded("beta", 3, &[(1, "Piranesi", "Susanna Clarke")]),
            recorded("beta", 5, &[(1, "circe", "madeline miller")]),
            recorded("gamma", 1, &[(4, "Dune", "Frank Herbert")]),
            recorded("gamma", 2, &[(1, "Emma", "Jane Austen")]),
            recorded("gamma", 3, &[]),
            recorded("gamma", 4, &[(2, "Sapiens", "Yuval Noah Harari")]),
            recorded("gamma", 5, &[(1, "Circe", "Madeline Miller")]),
        ];
        let queries = [
            QueryMeta::new(1, "genre").with_text("best science fiction epics"),
            QueryMeta::new(2, "genre").with_text("classic romance"),
            QueryMeta::new(3, "mood").with_text("books that feel like a dream"),
            QueryMeta::new(5, "mood").with_text("mythology retold"),
        ]
        .into_iter()
        .collect();
        Self {
            apps,
            golden_sets,
            result_sets,
            queries,
        }
    }
}
