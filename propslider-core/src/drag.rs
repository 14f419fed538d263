//! Knob drag controller — pointer gestures to redistributed proportion pairs.
//!
//! The controller never mutates the caller's pair. Its only state is the
//! ephemeral drag session opened on an accepted press and destroyed on
//! release; every accepted move proposes a replacement pair through the
//! return value, and the caller owns committing it.

use crate::domain::ProportionPair;
use crate::geometry::{PointerInput, Span};

/// Measured track layout, in the host's horizontal units.
///
/// `origin` is the track's left edge in the same coordinate space as
/// incoming pointer events. `knob_span` is knob width plus the gap on
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub origin: f64,
    pub track_width: f64,
    pub knob_span: f64,
}

impl TrackGeometry {
    /// Width available to the two segments once the knob is subtracted.
    pub fn usable_width(&self) -> f64 {
        self.track_width - self.knob_span
    }

    /// Display widths for the two segments: each side's percentage of the
    /// track minus half the knob span, so segments plus knob exactly fill
    /// the track. `None` when the pair's total or the track is degenerate.
    pub fn segment_widths(&self, pair: ProportionPair) -> Option<(f64, f64)> {
        let fraction = pair.left_fraction()?;
        if self.track_width <= 0.0 {
            return None;
        }
        let half_knob = self.knob_span / 2.0;
        let left = fraction * self.track_width - half_knob;
        let right = (1.0 - fraction) * self.track_width - half_knob;
        Some((left.max(0.0), right.max(0.0)))
    }
}

/// How pointer motion maps to a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Delta from the press position, applied to the value snapshot taken
    /// at press time. The default contract.
    #[default]
    Relative,
    /// Every move jumps to the value under the pointer, measured from the
    /// track's origin. No start snapshot is consulted beyond the total.
    Absolute,
}

/// Extra hit-box width granted to touch presses.
pub const TOUCH_SLOP: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f64,
    start_pair: ProportionPair,
}

/// Owns the single drag session and converts pointer motion into
/// redistributed pairs.
#[derive(Debug, Default)]
pub struct DragController {
    mode: DragMode,
    disabled: bool,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(mode: DragMode) -> Self {
        Self {
            mode,
            disabled: false,
            session: None,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Disabling cancels any open session and makes all input a no-op.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.session = None;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a press at this pointer lands on the knob. Mouse presses
    /// require exact containment; touch presses get a widened box since
    /// touch targets drift during contact.
    pub fn accepts_press(&self, input: &PointerInput, knob: Span) -> bool {
        if self.disabled {
            return false;
        }
        let Some(x) = input.client_x() else {
            return false;
        };
        if input.is_touch() {
            knob.expanded(TOUCH_SLOP).contains(x)
        } else {
            knob.contains(x)
        }
    }

    /// Open a drag session if the press lands on the knob. Returns whether
    /// the event was accepted (and default input side effects should be
    /// suppressed by the host).
    pub fn press(&mut self, input: &PointerInput, knob: Span, pair: ProportionPair) -> bool {
        if !self.accepts_press(input, knob) {
            return false;
        }
        // client_x is known Some after accepts_press.
        let Some(start_x) = input.client_x() else {
            return false;
        };
        self.session = Some(DragSession {
            start_x,
            start_pair: pair,
        });
        true
    }

    /// Convert a pointer move into a proposed pair. `None` when no session
    /// is open, the track is unmeasured or zero-width, or the total is zero
    /// — a no-op rather than a NaN.
    pub fn drag(&mut self, input: &PointerInput, geometry: TrackGeometry) -> Option<ProportionPair> {
        if self.disabled {
            return None;
        }
        let session = self.session?;
        let x = input.client_x()?;

        let usable = geometry.usable_width();
        let total = session.start_pair.total();
        if usable <= 0.0 || total <= 0.0 {
            return None;
        }

        let new_left = match self.mode {
            DragMode::Relative => {
                let diff = x - session.start_x;
                session.start_pair.left() + diff / usable * total
            }
            DragMode::Absolute => {
                (x - geometry.origin - geometry.knob_span / 2.0) / usable * total
            }
        };
        Some(session.start_pair.redistribute(new_left))
    }

    /// Close the session. Returns whether one was open ("handled").
    pub fn release(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TrackGeometry {
        TrackGeometry {
            origin: 0.0,
            track_width: 100.0,
            knob_span: 9.0,
        }
    }

    fn knob_at_center() -> Span {
        // 50/50 pair on a 100-wide track: knob span centered on x = 50.
        Span::new(45.5, 54.5)
    }

    #[test]
    fn relative_drag_redistributes_from_snapshot() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));

        let moved = ctl
            .drag(&PointerInput::Mouse { x: 45.0 }, geometry())
            .unwrap();
        // diff -5 over usable 91 of total 100.
        let expected = 50.0 - 5.0 / 91.0 * 100.0;
        assert!((moved.left() - expected).abs() < 1e-9);
        assert!((moved.total() - 100.0).abs() < 1e-9);

        assert!(ctl.release());
    }

    #[test]
    fn touch_drag_matches_mouse_semantics() {
        let mut mouse = DragController::default();
        let mut touch = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);

        assert!(mouse.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        assert!(touch.press(&PointerInput::touch(50.0), knob_at_center(), pair));

        let via_mouse = mouse
            .drag(&PointerInput::Mouse { x: 45.0 }, geometry())
            .unwrap();
        let via_touch = touch
            .drag(&PointerInput::touch(45.0), geometry())
            .unwrap();
        assert_eq!(via_mouse, via_touch);
    }

    #[test]
    fn press_off_knob_is_rejected() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(!ctl.press(&PointerInput::Mouse { x: 10.0 }, knob_at_center(), pair));
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn touch_press_gets_slop_mouse_does_not() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        // Just outside the knob box.
        assert!(!ctl.press(&PointerInput::Mouse { x: 55.0 }, knob_at_center(), pair));
        assert!(ctl.press(&PointerInput::touch(55.0), knob_at_center(), pair));
    }

    #[test]
    fn move_and_release_without_session_are_noops() {
        let mut ctl = DragController::default();
        assert_eq!(ctl.drag(&PointerInput::Mouse { x: 45.0 }, geometry()), None);
        assert!(!ctl.release());
    }

    #[test]
    fn moves_after_release_are_noops() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        assert!(ctl.release());
        assert_eq!(ctl.drag(&PointerInput::Mouse { x: 30.0 }, geometry()), None);
    }

    #[test]
    fn zero_usable_width_emits_nothing() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        let degenerate = TrackGeometry {
            origin: 0.0,
            track_width: 9.0,
            knob_span: 9.0,
        };
        assert_eq!(ctl.drag(&PointerInput::Mouse { x: 45.0 }, degenerate), None);
    }

    #[test]
    fn zero_total_emits_nothing() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(0.0, 0.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        assert_eq!(ctl.drag(&PointerInput::Mouse { x: 45.0 }, geometry()), None);
    }

    #[test]
    fn disabled_controller_ignores_everything() {
        let mut ctl = DragController::default();
        ctl.set_disabled(true);
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(!ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        assert_eq!(ctl.drag(&PointerInput::Mouse { x: 45.0 }, geometry()), None);
        assert!(!ctl.release());
    }

    #[test]
    fn disabling_mid_drag_cancels_the_session() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));
        ctl.set_disabled(true);
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn drag_clamps_far_beyond_track_bounds() {
        let mut ctl = DragController::default();
        let pair = ProportionPair::new(50.0, 50.0);
        assert!(ctl.press(&PointerInput::Mouse { x: 50.0 }, knob_at_center(), pair));

        let far_left = ctl
            .drag(&PointerInput::Mouse { x: -1000.0 }, geometry())
            .unwrap();
        assert_eq!(far_left.left(), 0.0);
        assert_eq!(far_left.right(), 100.0);

        let far_right = ctl
            .drag(&PointerInput::Mouse { x: 1000.0 }, geometry())
            .unwrap();
        assert_eq!(far_right.left(), 100.0);
        assert_eq!(far_right.right(), 0.0);
    }

    #[test]
    fn absolute_mode_jumps_to_pointer_position() {
        let mut ctl = DragController::new(DragMode::Absolute);
        let pair = ProportionPair::new(20.0, 80.0);
        // Knob sits at 20% of usable width; press accepted anywhere on it.
        let knob = Span::new(13.7, 22.7);
        assert!(ctl.press(&PointerInput::Mouse { x: 18.0 }, knob, pair));

        let geom = geometry();
        // Pointer at the exact track midpoint of the usable range.
        let x = geom.origin + geom.knob_span / 2.0 + geom.usable_width() / 2.0;
        let jumped = ctl.drag(&PointerInput::Mouse { x }, geom).unwrap();
        assert!((jumped.left() - 50.0).abs() < 1e-9);
        assert!((jumped.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn segment_widths_fill_the_track() {
        let geom = geometry();
        let pair = ProportionPair::new(50.0, 50.0);
        let (l, r) = geom.segment_widths(pair).unwrap();
        assert!((l + r + geom.knob_span - geom.track_width).abs() < 1e-9);
        assert!((l - r).abs() < 1e-9);
    }

    #[test]
    fn segment_widths_undefined_for_zero_total() {
        let geom = geometry();
        assert_eq!(geom.segment_widths(ProportionPair::new(0.0, 0.0)), None);
    }
}
