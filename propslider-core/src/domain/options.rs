//! Knob appearance options and secondary-node display mode.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Knob sizing and color, in the host's horizontal units.
///
/// Defaults match the original component contract: a 5-unit knob with a
/// 2-unit gap on each side. The knob's full horizontal span is therefore
/// `width + 2 * gap`. Terminal hosts substitute cell-sized values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnobOptions {
    pub width: f64,
    pub gap: f64,
    pub color: Option<Rgb>,
}

impl Default for KnobOptions {
    fn default() -> Self {
        Self {
            width: 5.0,
            gap: 2.0,
            color: None,
        }
    }
}

impl KnobOptions {
    /// Horizontal span the knob occupies inside the track: width plus the
    /// gap on both sides.
    pub fn span(&self) -> f64 {
        self.width + 2.0 * self.gap
    }
}

/// What the secondary node shows next to each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayValue {
    /// Rounded percentage of the total, e.g. `45%`.
    #[default]
    Percentage,
    /// No secondary node at all.
    None,
}
