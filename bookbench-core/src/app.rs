//! Applications under comparison.

use std::fmt;

/// Opaque identifier for an application.
///
/// The engine never inspects the value; it only compares identifiers to
/// partition recorded results by app.
///
/// # Examples
/// ```
/// use bookbench_core::AppId;
///
/// let id = AppId::from("storygraph");
/// assert_eq!(id.as_str(), "storygraph");
/// assert_eq!(id.to_string(), "storygraph");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AppId(String);

impl AppId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AppId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application whose search results are being compared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct App {
    /// Stable identifier used by recorded result sets.
    pub id: AppId,
    /// Display name.
    pub name: String,
    /// Location of the app's logo image.
    #[cfg_attr(feature = "serde", serde(default))]
    pub logo: String,
    /// Free-form operator notes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
}

impl App {
    /// Construct an app with an empty logo and notes.
    #[must_use]
    pub fn new(id: impl Into<AppId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: String::new(),
            notes: String::new(),
        }
    }
}
