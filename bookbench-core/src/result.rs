//! Result lists recorded by the operator for each app and query.

use crate::{AppId, Book};

/// The list an app returned for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResultSet {
    /// App that produced the list.
    pub app_id: AppId,
    /// Query the list answers.
    pub query_index: u32,
    /// Books in the order the app showed them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub books: Vec<Book>,
}

/// Recording progress for one app on one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResultStatus {
    /// At least one book has been recorded.
    Complete,
    /// Nothing has been recorded yet.
    NotStarted,
}

impl ResultStatus {
    /// Status for an optional result set; absence counts as not started.
    ///
    /// # Examples
    /// ```
    /// use bookbench_core::{Book, ResultSet, ResultStatus};
    ///
    /// let recorded = ResultSet::new("kindle", 3, vec![Book::new(1, "Dune", "Frank Herbert")]);
    /// assert_eq!(ResultStatus::of(Some(&recorded)), ResultStatus::Complete);
    /// assert_eq!(ResultStatus::of(None), ResultStatus::NotStarted);
    /// ```
    #[must_use]
    pub fn of(result: Option<&ResultSet>) -> Self {
        result.map_or(Self::NotStarted, ResultSet::status)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::NotStarted => "Not started",
        }
    }
}

impl ResultSet {
    /// Construct a result set.
    #[must_use]
    pub fn new(app_id: impl Into<AppId>, query_index: u32, books: Vec<Book>) -> Self {
        Self {
            app_id: app_id.into(),
            query_index,
            books,
        }
    }

    /// Report whether any books were recorded.
    #[must_use]
    pub fn has_books(&self) -> bool {
        !self.books.is_empty()
    }

    /// Recording progress of this set.
    #[must_use]
    pub fn status(&self) -> ResultStatus {
        if self.has_books() {
            ResultStatus::Complete
        } else {
            ResultStatus::NotStarted
        }
    }
}
