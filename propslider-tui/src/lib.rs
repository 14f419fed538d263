//! Ratatui proportion slider — widget, input routing, and demo chrome.
//!
//! The reusable piece is [`widget::ProportionSlider`] plus
//! [`widget::SliderState`]; everything else here is the demo sandbox
//! (app state, key/mouse dispatch, config, persistence, layout).

pub mod app;
pub mod config;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;
pub mod widget;

pub use widget::{KnobStyle, MouseOutcome, ProportionSlider, SliderState};
