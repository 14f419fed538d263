//! Segment positioning — where each label anchors inside its segment.
//!
//! Each segment shows two nodes: the primary (the side's label, anchored
//! preferentially inside) and the secondary (the percentage/value node
//! competing for the same space). As the segment narrows, nodes migrate
//! from inside anchors to outside ones instead of overlapping.

use crate::easing::Transition;
use crate::fit::FitState;

/// Which side of the slider a segment represents. The primary label of a
/// left segment anchors at the segment's start (outer) edge; of a right
/// segment at its end edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The six-position anchor vocabulary, expressed relative to the segment:
/// `Start` is the segment's left edge, `End` its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    InsideStart,
    InsideEnd,
    OutsideAboveStart,
    OutsideBelowStart,
    OutsideAboveEnd,
    OutsideBelowEnd,
}

impl Anchor {
    pub fn is_inside(self) -> bool {
        matches!(self, Anchor::InsideStart | Anchor::InsideEnd)
    }
}

/// Chosen anchors for one segment's two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPlacement {
    pub primary: Anchor,
    pub secondary: Anchor,
}

/// The placement rule table. The primary claims its side's outer edge;
/// the secondary yields to the outside-above position first, and the
/// primary itself retreats outside-below only when nothing fits.
pub fn place_labels(primary: Side, fit: FitState) -> LabelPlacement {
    match (primary, fit) {
        (Side::Left, FitState::BothFit) => LabelPlacement {
            primary: Anchor::InsideStart,
            secondary: Anchor::InsideEnd,
        },
        (Side::Left, FitState::OnlyPrimaryFits) => LabelPlacement {
            primary: Anchor::InsideStart,
            secondary: Anchor::OutsideAboveStart,
        },
        (Side::Left, FitState::NoneFit) => LabelPlacement {
            primary: Anchor::OutsideBelowStart,
            secondary: Anchor::OutsideAboveStart,
        },
        (Side::Right, FitState::BothFit) => LabelPlacement {
            primary: Anchor::InsideEnd,
            secondary: Anchor::InsideStart,
        },
        (Side::Right, FitState::OnlyPrimaryFits) => LabelPlacement {
            primary: Anchor::InsideEnd,
            secondary: Anchor::OutsideAboveEnd,
        },
        (Side::Right, FitState::NoneFit) => LabelPlacement {
            primary: Anchor::OutsideBelowEnd,
            secondary: Anchor::OutsideAboveEnd,
        },
    }
}

/// An anchor with an animated approach: when the target changes, hosts
/// interpolate between the previous and current anchor positions using
/// the eased transition progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedAnchor {
    current: Anchor,
    previous: Anchor,
    transition: Transition,
}

impl AnimatedAnchor {
    pub fn new(anchor: Anchor) -> Self {
        Self {
            current: anchor,
            previous: anchor,
            transition: Transition::default(),
        }
    }

    pub fn current(&self) -> Anchor {
        self.current
    }

    pub fn previous(&self) -> Anchor {
        self.previous
    }

    /// Retarget; restarts the transition only on an actual change.
    pub fn set_target(&mut self, anchor: Anchor) {
        if anchor == self.current {
            return;
        }
        self.previous = self.current;
        self.current = anchor;
        self.transition.restart();
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.transition.advance(dt_ms);
    }

    /// Eased blend factor from previous (0.0) to current (1.0); may
    /// overshoot past 1.0 mid-flight.
    pub fn blend(&self) -> f64 {
        self.transition.eased()
    }

    pub fn is_settled(&self) -> bool {
        self.transition.is_complete()
    }
}
