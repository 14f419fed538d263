//! Per-side descriptor: label, color, accessible name, caller payload.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Immutable description of one proportion side, supplied per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionDetail {
    /// User-facing label (the "primary" node competing for segment space).
    pub label: String,
    /// Segment background color; hosts fall back to a theme default.
    pub background: Option<Rgb>,
    /// Accessible name reported alongside the rounded percentage.
    pub aria_label: Option<String>,
    /// Opaque payload carried through untouched for the caller.
    pub data: Option<serde_json::Value>,
}

impl ProportionDetail {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: None,
            aria_label: None,
            data: None,
        }
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
