//! Proportion slider engine — UI-toolkit-agnostic interaction logic.
//!
//! A proportion slider is a horizontal bar split into two colored segments
//! whose sizes sum to a caller-supplied total, separated by a draggable
//! knob that redistributes the quantity between the sides. This crate owns
//! the parts that are independent of any particular UI host:
//! - Domain types (proportion pair, per-side details, colors, knob options)
//! - Pointer-x extraction shared by mouse and touch input
//! - The knob drag controller and its single ephemeral drag session
//! - Label fit classification and the periodic fit sampler
//! - The segment positioner's anchor rule table and reposition animation
//!
//! All horizontal quantities are in abstract "units": pixels for a GUI
//! host, terminal cells for a TUI host. There is no failure surface in
//! normal operation — degenerate geometry and missing sessions are
//! defensive no-ops, never NaNs or panics.

pub mod anchor;
pub mod domain;
pub mod drag;
pub mod easing;
pub mod fit;
pub mod geometry;

pub use anchor::{place_labels, AnimatedAnchor, Anchor, LabelPlacement, Side};
pub use domain::{
    DisplayValue, KnobOptions, ParseColorError, ProportionDetail, ProportionPair, Rgb,
};
pub use drag::{DragController, DragMode, TrackGeometry, TOUCH_SLOP};
pub use easing::{ease_out_back, Transition, ANCHOR_TRANSITION_MS};
pub use fit::{classify_fit, FitMeasurement, FitSampler, FitState, SAMPLE_INTERVAL_MS};
pub use geometry::{PointerInput, Span};
