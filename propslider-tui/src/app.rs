//! Demo application state — single-owner, main-thread only.

use propslider_core::{DisplayValue, ProportionDetail, ProportionPair};

use crate::widget::{KnobStyle, SliderState};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// All demo state. The slider widget reads the committed value each frame
/// and proposes replacements through mouse handling; `commit` is the
/// demo's `on_change` callback.
#[derive(Debug)]
pub struct AppState {
    pub value: ProportionPair,
    pub initial: ProportionPair,
    pub details: [ProportionDetail; 2],
    pub knob: KnobStyle,
    pub display: DisplayValue,
    pub disabled: bool,
    pub height: u16,
    pub aria_label: Option<String>,
    pub slider: SliderState,
    pub running: bool,
    pub status: Option<StatusMessage>,
    /// Emissions committed this session, surfaced in the status bar.
    pub change_count: u64,
}

impl AppState {
    pub fn new(value: ProportionPair) -> Self {
        Self {
            value,
            initial: value,
            details: [
                ProportionDetail::new("Left"),
                ProportionDetail::new("Right"),
            ],
            knob: KnobStyle::default(),
            display: DisplayValue::Percentage,
            disabled: false,
            height: 5,
            aria_label: None,
            slider: SliderState::new(),
            running: true,
            status: None,
            change_count: 0,
        }
    }

    /// Accept a proposed pair from the drag controller.
    pub fn commit(&mut self, pair: ProportionPair) {
        self.value = pair;
        self.change_count += 1;
    }

    pub fn reset(&mut self) {
        self.slider.cancel_drag();
        self.value = self.initial;
        self.set_status("Reset to initial values");
    }

    pub fn toggle_disabled(&mut self) {
        self.disabled = !self.disabled;
        self.slider.cancel_drag();
        self.set_status(if self.disabled {
            "Slider disabled"
        } else {
            "Slider enabled"
        });
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: StatusLevel::Info,
            text: text.into(),
        });
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level: StatusLevel::Warning,
            text: text.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_replaces_value_and_counts() {
        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        app.commit(ProportionPair::new(30.0, 70.0));
        assert_eq!(app.value, ProportionPair::new(30.0, 70.0));
        assert_eq!(app.change_count, 1);
    }

    #[test]
    fn reset_restores_initial_pair() {
        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        app.commit(ProportionPair::new(10.0, 90.0));
        app.reset();
        assert_eq!(app.value, ProportionPair::new(50.0, 50.0));
    }

    #[test]
    fn toggle_disabled_flips_and_reports() {
        let mut app = AppState::new(ProportionPair::new(50.0, 50.0));
        assert!(!app.disabled);
        app.toggle_disabled();
        assert!(app.disabled);
        assert!(app.status.is_some());
    }
}
