//! Label fit evaluation — do both nodes fit inside the segment right now?
//!
//! The segment width changes continuously while the user drags and while
//! any settle animation runs afterward, so fit is re-evaluated on a fixed
//! cadence rather than measured once. The sampler is driven by explicit
//! `tick` calls from the host's frame loop; dropping the owning state
//! stops sampling by construction.

/// Breathing room required around labels, in host units.
pub const DEFAULT_FIT_GAP: f64 = 5.0;

/// Sampling cadence: 30 evaluations per second.
pub const SAMPLE_INTERVAL_MS: f64 = 1000.0 / 30.0;

/// Whether the primary label and the secondary value node fit inside the
/// segment at its current width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitState {
    #[default]
    BothFit,
    OnlyPrimaryFits,
    NoneFit,
}

/// One measurement of the rendered widths, in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitMeasurement {
    pub primary_width: f64,
    pub secondary_width: f64,
    pub container_width: f64,
}

/// Classify a measurement. The primary fits when it leaves a gap on both
/// sides; the secondary additionally needs a gap between the two nodes.
pub fn classify_fit(m: FitMeasurement, gap: f64) -> FitState {
    let primary_can_fit = m.primary_width + 2.0 * gap <= m.container_width;
    let secondary_can_fit =
        m.secondary_width + m.primary_width + 3.0 * gap <= m.container_width;
    if primary_can_fit {
        if secondary_can_fit {
            FitState::BothFit
        } else {
            FitState::OnlyPrimaryFits
        }
    } else {
        FitState::NoneFit
    }
}

/// Periodic fit re-evaluation for one segment.
#[derive(Debug)]
pub struct FitSampler {
    gap: f64,
    interval_ms: f64,
    accumulated_ms: f64,
    state: FitState,
}

impl Default for FitSampler {
    fn default() -> Self {
        Self::new(DEFAULT_FIT_GAP)
    }
}

impl FitSampler {
    pub fn new(gap: f64) -> Self {
        Self {
            gap,
            interval_ms: SAMPLE_INTERVAL_MS,
            accumulated_ms: 0.0,
            state: FitState::BothFit,
        }
    }

    pub fn state(&self) -> FitState {
        self.state
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Advance by `dt_ms` and re-classify if a sampling interval elapsed.
    /// `measure` returns `None` when the container is not yet laid out;
    /// that tick is skipped and classification retries next interval.
    /// Returns true when the fit state changed.
    pub fn tick(
        &mut self,
        dt_ms: f64,
        measure: impl FnOnce() -> Option<FitMeasurement>,
    ) -> bool {
        self.accumulated_ms += dt_ms;
        if self.accumulated_ms < self.interval_ms {
            return false;
        }
        self.accumulated_ms %= self.interval_ms;

        let Some(measurement) = measure() else {
            return false;
        };
        let next = classify_fit(measurement, self.gap);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(primary: f64, secondary: f64, container: f64) -> FitMeasurement {
        FitMeasurement {
            primary_width: primary,
            secondary_width: secondary,
            container_width: container,
        }
    }

    #[test]
    fn wide_container_fits_both() {
        assert_eq!(classify_fit(m(40.0, 30.0, 200.0), 5.0), FitState::BothFit);
    }

    #[test]
    fn narrow_container_fits_primary_only() {
        // primary 40 + 10 <= 60, but 30 + 40 + 15 > 60.
        assert_eq!(
            classify_fit(m(40.0, 30.0, 60.0), 5.0),
            FitState::OnlyPrimaryFits
        );
    }

    #[test]
    fn tiny_container_fits_none() {
        assert_eq!(classify_fit(m(40.0, 30.0, 45.0), 5.0), FitState::NoneFit);
    }

    #[test]
    fn fit_boundaries_are_inclusive() {
        // Exactly primary + 2*gap and secondary + primary + 3*gap.
        assert_eq!(classify_fit(m(40.0, 30.0, 85.0), 5.0), FitState::BothFit);
        assert_eq!(classify_fit(m(40.0, 30.0, 50.0), 5.0), FitState::OnlyPrimaryFits);
    }

    #[test]
    fn sampler_waits_for_the_interval() {
        let mut sampler = FitSampler::new(5.0);
        // Less than one interval: no sampling, measure not consulted.
        assert!(!sampler.tick(10.0, || panic!("sampled too early")));
        // Crossing the interval boundary samples once.
        let changed = sampler.tick(30.0, || Some(m(40.0, 30.0, 45.0)));
        assert!(changed);
        assert_eq!(sampler.state(), FitState::NoneFit);
    }

    #[test]
    fn sampler_flips_within_one_interval_of_shrinking() {
        let mut sampler = FitSampler::new(5.0);
        sampler.tick(SAMPLE_INTERVAL_MS, || Some(m(40.0, 30.0, 200.0)));
        assert_eq!(sampler.state(), FitState::BothFit);

        // Segment shrinks below primary + 2*gap; the very next interval
        // must reclassify.
        let changed = sampler.tick(SAMPLE_INTERVAL_MS, || Some(m(40.0, 30.0, 48.0)));
        assert!(changed);
        assert_eq!(sampler.state(), FitState::NoneFit);
    }

    #[test]
    fn unmeasured_tick_is_skipped_and_retried() {
        let mut sampler = FitSampler::new(5.0);
        sampler.tick(SAMPLE_INTERVAL_MS, || Some(m(40.0, 30.0, 45.0)));
        assert_eq!(sampler.state(), FitState::NoneFit);

        // Measurement race: keeps the previous state, no panic.
        assert!(!sampler.tick(SAMPLE_INTERVAL_MS, || None));
        assert_eq!(sampler.state(), FitState::NoneFit);

        // Next interval with a real measurement recovers.
        assert!(sampler.tick(SAMPLE_INTERVAL_MS, || Some(m(40.0, 30.0, 200.0))));
        assert_eq!(sampler.state(), FitState::BothFit);
    }
}
