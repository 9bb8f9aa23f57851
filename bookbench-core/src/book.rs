//! A single entry in a recorded or golden book list.

use crate::normalize::same_work;

/// A ranked book as entered by an operator.
///
/// `rank` is the 1-based position given by whoever entered the list. It is
/// optional so that partially entered data can still be scored: a missing
/// rank sorts after every real rank and never earns a position bonus.
///
/// # Examples
/// ```
/// use bookbench_core::Book;
///
/// let golden = Book::new(2, "Dune", "Frank Herbert");
/// let recorded = Book::new(1, "dune", "frank herbert");
/// assert!(recorded.is_same_work(&golden));
/// assert!(recorded.ranks_at_or_above(&golden));
/// assert!(!Book::unranked("Dune", "Frank Herbert").ranks_at_or_above(&golden));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Book {
    /// Position in the list, starting at 1.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rank: Option<u32>,
    /// Title as entered.
    pub title: String,
    /// Author as entered.
    pub author: String,
}

impl Book {
    /// Construct a ranked book.
    #[must_use]
    pub fn new(rank: u32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            rank: Some(rank),
            title: title.into(),
            author: author.into(),
        }
    }

    /// Construct a book without a rank.
    #[must_use]
    pub fn unranked(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            rank: None,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Report whether both title and author match `other` once normalized.
    #[must_use]
    pub fn is_same_work(&self, other: &Self) -> bool {
        same_work(&self.title, &other.title) && same_work(&self.author, &other.author)
    }

    /// Report whether this book sits at `target`'s rank or better.
    ///
    /// Returns `false` when either rank is missing.
    #[must_use]
    pub fn ranks_at_or_above(&self, target: &Self) -> bool {
        match (self.rank, target.rank) {
            (Some(own), Some(expected)) => own <= expected,
            _ => false,
        }
    }
}
