//! Query metadata and the catalogue keyed by query index.

use std::collections::BTreeMap;

/// Descriptive metadata for one benchmark query.
///
/// Only `category` takes part in scoring; `text` and `description` are
/// carried through for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct QueryMeta {
    /// Position of the query in the bank, `1..=50`.
    pub index: u32,
    /// Category used to bucket scores.
    pub category: String,
    /// The query as typed into each app.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// What a good answer looks like.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl QueryMeta {
    /// Construct metadata with empty text and description.
    #[must_use]
    pub fn new(index: u32, category: impl Into<String>) -> Self {
        Self {
            index,
            category: category.into(),
            text: String::new(),
            description: String::new(),
        }
    }

    /// Attach the query text, returning `self` for chaining.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Lookup from query index to its metadata.
///
/// When two entries share an index the later one wins.
///
/// # Examples
/// ```
/// use bookbench_core::{QueryCatalogue, QueryMeta};
///
/// let catalogue: QueryCatalogue = [
///     QueryMeta::new(1, "mood"),
///     QueryMeta::new(2, "comparison"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(catalogue.category(2), Some("comparison"));
/// assert_eq!(catalogue.category(3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCatalogue {
    queries: BTreeMap<u32, QueryMeta>,
}

impl QueryCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the metadata for `query.index`.
    pub fn insert(&mut self, query: QueryMeta) {
        self.queries.insert(query.index, query);
    }

    /// Return the metadata for `index`, if present.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&QueryMeta> {
        self.queries.get(&index)
    }

    /// Return the category for `index`, if present.
    #[must_use]
    pub fn category(&self, index: u32) -> Option<&str> {
        self.get(index).map(|query| query.category.as_str())
    }

    /// Number of catalogued queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Iterate over the metadata in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryMeta> {
        self.queries.values()
    }
}

impl FromIterator<QueryMeta> for QueryCatalogue {
    fn from_iter<I: IntoIterator<Item = QueryMeta>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for query in iter {
            catalogue.insert(query);
        }
        catalogue
    }
}
