//! Easing and timed transitions for label repositioning.

/// Duration of an anchor reposition animation.
pub const ANCHOR_TRANSITION_MS: f64 = 200.0;

/// Ease-out-back: decelerates with a slight overshoot past 1.0 before
/// settling, so labels spring into their new anchor instead of snapping.
pub fn ease_out_back(t: f64) -> f64 {
    const C1: f64 = 1.70158;
    const C3: f64 = C1 + 1.0;
    let t = t.clamp(0.0, 1.0);
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

/// A timed transition driven by explicit `advance` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Transition {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            // Born complete; restart() begins an animation.
            elapsed_ms: duration_ms,
        }
    }

    pub fn restart(&mut self) {
        self.elapsed_ms = 0.0;
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased progress; may overshoot 1.0 mid-flight.
    pub fn eased(&self) -> f64 {
        ease_out_back(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(ANCHOR_TRANSITION_MS)
    }
}
