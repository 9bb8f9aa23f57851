//! Percentage rounding and coarse score bands.
//!
//! Rounding happens only here, at the presentation boundary. Running totals
//! are accumulated at full precision.

use serde::{Deserialize, Serialize};

/// Express `total` as a percentage of `max`, rounded to one decimal place.
///
/// Halves round away from zero. Returns `0.0` when `max` is not positive.
///
/// # Examples
/// ```
/// use bookbench_scorer::percentage;
///
/// assert!((percentage(1.0, 3.0) - 33.3).abs() < 1e-9);
/// assert!((percentage(2.0, 3.0) - 66.7).abs() < 1e-9);
/// assert_eq!(percentage(4.0, 0.0), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "percentages scale a ratio and round to one decimal place"
)]
#[must_use]
pub fn percentage(total: f64, max: f64) -> f64 {
    if max > 0.0 {
        (total / max * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

/// Coarse label for a percentage, used to colour-code dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80% and above.
    Excellent,
    /// From 60% up to 80%.
    Strong,
    /// From 40% up to 60%.
    Fair,
    /// From 20% up to 40%.
    Weak,
    /// Below 20%.
    Poor,
}

impl ScoreBand {
    /// Classify a percentage in `0.0..=100.0`.
    ///
    /// # Examples
    /// ```
    /// use bookbench_scorer::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::from_percentage(80.0), ScoreBand::Excellent);
    /// assert_eq!(ScoreBand::from_percentage(59.9), ScoreBand::Fair);
    /// assert_eq!(ScoreBand::from_percentage(0.0), ScoreBand::Poor);
    /// ```
    #[must_use]
    pub fn from_percentage(value: f64) -> Self {
        if value >= 80.0 {
            Self::Excellent
        } else if value >= 60.0 {
            Self::Strong
        } else if value >= 40.0 {
            Self::Fair
        } else if value >= 20.0 {
            Self::Weak
        } else {
            Self::Poor
        }
    }

    /// Lowercase name of the band.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Fair => "fair",
            Self::Weak => "weak",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
