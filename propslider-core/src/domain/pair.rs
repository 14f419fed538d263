//! ProportionPair — the two quantities whose ratio the slider edits.

use serde::{Deserialize, Serialize};

/// Ordered pair of non-negative quantities `(left, right)`.
///
/// The pair is owned by the embedding caller; the engine only reads the
/// current pair and proposes replacements. Negative inputs are clamped to
/// zero on construction rather than rejected. Percentage accessors are
/// defined only when `total() > 0`.
///
/// Serialized as a `(left, right)` tuple; deserialization goes through
/// [`ProportionPair::new`] so persisted data cannot bypass the clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ProportionPair {
    left: f64,
    right: f64,
}

impl From<(f64, f64)> for ProportionPair {
    fn from((left, right): (f64, f64)) -> Self {
        Self::new(left, right)
    }
}

impl From<ProportionPair> for (f64, f64) {
    fn from(pair: ProportionPair) -> (f64, f64) {
        (pair.left, pair.right)
    }
}

impl ProportionPair {
    /// Build a pair, clamping negative or NaN components to zero.
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: sanitize(left),
            right: sanitize(right),
        }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn total(&self) -> f64 {
        self.left + self.right
    }

    /// Left share as a fraction in `[0, 1]`, or `None` when the total is zero.
    pub fn left_fraction(&self) -> Option<f64> {
        let total = self.total();
        (total > 0.0).then(|| self.left / total)
    }

    /// Rounded left percentage for the accessibility surface.
    pub fn left_percent_rounded(&self) -> Option<u8> {
        self.left_fraction().map(|f| (f * 100.0).round() as u8)
    }

    /// Rounded right percentage. Rounded independently of the left side,
    /// so the two need not sum to exactly 100.
    pub fn right_percent_rounded(&self) -> Option<u8> {
        let total = self.total();
        (total > 0.0).then(|| (self.right / total * 100.0).round() as u8)
    }

    /// Redistribute the total so the left component becomes `new_left`,
    /// clamped to `[0, total]`. The total is conserved exactly as
    /// `total - clamped_left` on the right side.
    pub fn redistribute(&self, new_left: f64) -> Self {
        let total = self.total();
        let left = new_left.max(0.0).min(total);
        Self {
            left,
            right: total - left,
        }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0)
    }
}
