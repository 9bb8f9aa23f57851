//! Canonical form for comparing titles and authors.
//!
//! The rule is deliberately narrow: lower-case, trim the outer whitespace, and
//! fold the typographic apostrophe (`U+2019`) onto the ASCII one. Nothing else
//! is touched, so diacritics, inner whitespace and other punctuation must
//! already agree for two strings to compare equal.
//!
//! # Examples
//! ```
//! use bookbench_core::normalize::{normalize, same_work};
//!
//! assert_eq!(normalize("  Gone Girl\u{2019}s "), "gone girl's");
//! assert!(same_work("The Hobbit", "the hobbit"));
//! assert!(!same_work("The  Hobbit", "The Hobbit"));
//! ```

/// Apostrophe every variant is mapped onto.
pub const CANONICAL_APOSTROPHE: char = '\'';

const RIGHT_SINGLE_QUOTATION_MARK: char = '\u{2019}';

/// Return the canonical comparison form of `value`.
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .trim()
        .chars()
        .map(|ch| {
            if ch == RIGHT_SINGLE_QUOTATION_MARK {
                CANONICAL_APOSTROPHE
            } else {
                ch
            }
        })
        .collect()
}

/// Report whether `left` and `right` name the same work once normalized.
#[must_use]
pub fn same_work(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}
