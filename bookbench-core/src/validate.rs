//! Input validation for operator-entered data.
//!
//! Scoring is total over its input shape and never calls into this module.
//! Callers that accept data from outside (the CLI loader, an HTTP handler)
//! run these checks first so the engine only ever sees well-formed
//! collections.
//!
//! # Examples
//! ```
//! use bookbench_core::validate::{Validate, ValidationError, validate_query_index};
//! use bookbench_core::{Book, GoldenSet};
//!
//! assert_eq!(validate_query_index(50), Ok(50));
//! assert!(validate_query_index(51).is_err());
//!
//! let golden = GoldenSet::new(3, vec![Book::new(1, "  ", "Frank Herbert")]);
//! assert_eq!(
//!     golden.validate(),
//!     Err(ValidationError::EmptyTitle { query_index: 3, position: 1 }),
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    App, AppId, Book, GoldenSet, MAX_BOOKS_PER_LIST, MAX_RANK, QueryMeta, ResultSet,
    TOTAL_QUERIES,
};

/// Reasons operator input is rejected before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A query index fell outside `1..=50`.
    #[error("query index {index} must be between 1 and {max}", max = TOTAL_QUERIES)]
    QueryIndexOutOfRange {
        /// Offending index.
        index: u32,
    },
    /// A list held more books than allowed.
    #[error(
        "query {query_index} lists {count} books; at most {max} are allowed",
        max = MAX_BOOKS_PER_LIST
    )]
    TooManyBooks {
        /// Query the list belongs to.
        query_index: u32,
        /// Number of books supplied.
        count: usize,
    },
    /// A book carried a rank outside `1..=9`.
    #[error(
        "book {position} of query {query_index} has rank {rank}; expected 1 to {max}",
        max = MAX_RANK
    )]
    RankOutOfRange {
        /// Query the list belongs to.
        query_index: u32,
        /// 1-based position of the book in its list.
        position: usize,
        /// Offending rank.
        rank: u32,
    },
    /// A book had a blank title.
    #[error("book {position} of query {query_index} has an empty title")]
    EmptyTitle {
        /// Query the list belongs to.
        query_index: u32,
        /// 1-based position of the book in its list.
        position: usize,
    },
    /// A book had a blank author.
    #[error("book {position} of query {query_index} has an empty author")]
    EmptyAuthor {
        /// Query the list belongs to.
        query_index: u32,
        /// 1-based position of the book in its list.
        position: usize,
    },
    /// Query metadata had a blank category.
    #[error("query {index} has an empty category")]
    EmptyCategory {
        /// Query index.
        index: u32,
    },
    /// Two queries shared an index.
    #[error("query {index} is defined more than once")]
    DuplicateQuery {
        /// Repeated index.
        index: u32,
    },
    /// An app had a blank identifier.
    #[error("app identifiers must not be empty")]
    EmptyAppId,
    /// An app had a blank name.
    #[error("app {id} has an empty name")]
    EmptyAppName {
        /// Identifier of the app.
        id: AppId,
    },
    /// Two apps shared an identifier.
    #[error("app {id} is defined more than once")]
    DuplicateApp {
        /// Repeated identifier.
        id: AppId,
    },
    /// Two golden sets targeted the same query.
    #[error("golden answer for query {query_index} is defined more than once")]
    DuplicateGolden {
        /// Repeated query index.
        query_index: u32,
    },
    /// An app had two result sets for the same query.
    #[error("app {app_id} has more than one result for query {query_index}")]
    DuplicateResult {
        /// App that recorded the results.
        app_id: AppId,
        /// Repeated query index.
        query_index: u32,
    },
}

/// Check a single record in isolation.
pub trait Validate {
    /// Return the first problem found, if any.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] describing the first rule broken.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accept `index` when it lies in `1..=50`.
///
/// # Errors
/// Returns [`ValidationError::QueryIndexOutOfRange`] otherwise.
pub fn validate_query_index(index: u32) -> Result<u32, ValidationError> {
    if (1..=TOTAL_QUERIES).contains(&index) {
        Ok(index)
    } else {
        Err(ValidationError::QueryIndexOutOfRange { index })
    }
}

/// Check the shape of a book list recorded for `query_index`.
///
/// # Errors
/// Returns the first problem found: an oversize list, a rank outside
/// `1..=9`, or a blank title or author.
pub fn validate_books(query_index: u32, books: &[Book]) -> Result<(), ValidationError> {
    if books.len() > MAX_BOOKS_PER_LIST {
        return Err(ValidationError::TooManyBooks {
            query_index,
            count: books.len(),
        });
    }
    for (offset, book) in books.iter().enumerate() {
        let position = offset + 1;
        if let Some(rank) = book.rank
            && !(1..=MAX_RANK).contains(&rank)
        {
            return Err(ValidationError::RankOutOfRange {
                query_index,
                position,
                rank,
            });
        }
        if book.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle {
                query_index,
                position,
            });
        }
        if book.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor {
                query_index,
                position,
            });
        }
    }
    Ok(())
}

impl Validate for GoldenSet {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_query_index(self.query_index)?;
        validate_books(self.query_index, &self.books)
    }
}

impl Validate for ResultSet {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.app_id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyAppId);
        }
        validate_query_index(self.query_index)?;
        validate_books(self.query_index, &self.books)
    }
}

impl Validate for QueryMeta {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_query_index(self.index)?;
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory { index: self.index });
        }
        Ok(())
    }
}

impl Validate for App {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyAppId);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyAppName {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Validate every golden set and reject repeated query indices.
///
/// # Errors
/// Returns the first invalid set or [`ValidationError::DuplicateGolden`].
pub fn validate_golden_sets(golden_sets: &[GoldenSet]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for golden in golden_sets {
        golden.validate()?;
        if !seen.insert(golden.query_index) {
            return Err(ValidationError::DuplicateGolden {
                query_index: golden.query_index,
            });
        }
    }
    Ok(())
}

/// Validate every result set and reject repeated `(app, query)` pairs.
///
/// # Errors
/// Returns the first invalid set or [`ValidationError::DuplicateResult`].
pub fn validate_result_sets(result_sets: &[ResultSet]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for result in result_sets {
        result.validate()?;
        if !seen.insert((&result.app_id, result.query_index)) {
            return Err(ValidationError::DuplicateResult {
                app_id: result.app_id.clone(),
                query_index: result.query_index,
            });
        }
    }
    Ok(())
}

/// Validate query metadata and reject repeated indices.
///
/// # Errors
/// Returns the first invalid entry or [`ValidationError::DuplicateQuery`].
pub fn validate_queries(queries: &[QueryMeta]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for query in queries {
        query.validate()?;
        if !seen.insert(query.index) {
            return Err(ValidationError::DuplicateQuery { index: query.index });
        }
    }
    Ok(())
}

/// Validate apps and reject repeated identifiers.
///
/// # Errors
/// Returns the first invalid app or [`ValidationError::DuplicateApp`].
pub fn validate_apps(apps: &[App]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for app in apps {
        app.validate()?;
        if !seen.insert(&app.id) {
            return Err(ValidationError::DuplicateApp { id: app.id.clone() });
        }
    }
    Ok(())
}
