//! Pointer-x extraction and small horizontal-geometry helpers.

/// A pointer event from either input family, reduced to what the drag
/// controller needs. Touch events carry every active contact point;
/// extraction uses the first.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { x: f64 },
    Touch { contacts: Vec<f64> },
}

impl PointerInput {
    /// Single touch contact, the common case.
    pub fn touch(x: f64) -> Self {
        Self::Touch { contacts: vec![x] }
    }

    /// Horizontal coordinate of the event. `None` for a touch event with
    /// no contacts (possible on touch-end), which callers treat as a no-op.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            Self::Mouse { x } => Some(*x),
            Self::Touch { contacts } => contacts.first().copied(),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}

/// Half-open horizontal interval `[start, end)` in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x < self.end
    }

    /// Widened on both sides. Touch targets drift during contact, so touch
    /// hit-testing uses containment in a widened span rather than an exact
    /// match.
    pub fn expanded(&self, slop: f64) -> Self {
        Self {
            start: self.start - slop,
            end: self.end + slop,
        }
    }
}
