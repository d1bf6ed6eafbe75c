//! Calibration for the standard runner training-status model.
//!
//! Universe bounds, discretization steps, and triangular term breakpoints for
//! the three inputs and the output. Adjacent terms overlap on purpose: every
//! in-range value holds nonzero membership in at least one term, so the rule
//! base never sees a dead zone.

/// Heart rate input, in beats per minute.
///
/// The band covers steady aerobic work up to near-maximal effort for adult
/// recreational runners; resting values have no place in a training session.
pub mod heart_rate {
    /// Lower bound of the universe.
    pub const MIN: f64 = 100.0;
    /// Upper bound of the universe.
    pub const MAX: f64 = 190.0;
    /// Discretization step.
    pub const STEP: f64 = 0.1;

    /// `low` term breakpoints.
    pub const LOW: (f64, f64, f64) = (100.0, 120.0, 135.0);
    /// `moderate` term breakpoints.
    pub const MODERATE: (f64, f64, f64) = (130.0, 145.0, 165.0);
    /// `high` term breakpoints.
    pub const HIGH: (f64, f64, f64) = (160.0, 175.0, 190.0);
}

/// Pacing input, in minutes per kilometre. Lower is faster.
pub mod pacing {
    /// Lower bound of the universe.
    pub const MIN: f64 = 3.0;
    /// Upper bound of the universe.
    pub const MAX: f64 = 9.0;
    /// Discretization step.
    pub const STEP: f64 = 0.1;

    /// `fast` term breakpoints.
    pub const FAST: (f64, f64, f64) = (3.0, 3.8, 4.6);
    /// `moderate` term breakpoints.
    pub const MODERATE: (f64, f64, f64) = (4.4, 5.6, 6.8);
    /// `slow` term breakpoints.
    pub const SLOW: (f64, f64, f64) = (6.4, 7.8, 9.0);
}

/// Distance input, in kilometres, capped at marathon length.
pub mod distance {
    /// Lower bound of the universe.
    pub const MIN: f64 = 0.0;
    /// Upper bound of the universe.
    pub const MAX: f64 = 42.0;
    /// Discretization step.
    pub const STEP: f64 = 0.1;

    /// `short` term breakpoints.
    pub const SHORT: (f64, f64, f64) = (0.0, 4.0, 10.0);
    /// `medium` term breakpoints.
    pub const MEDIUM: (f64, f64, f64) = (8.0, 18.0, 28.0);
    /// `long` term breakpoints.
    pub const LONG: (f64, f64, f64) = (25.0, 35.0, 42.0);
}

/// Training status output, a dimensionless scale from undertrained (0) to
/// overtrained (1). The finer step keeps the centroid stable.
pub mod training_status {
    /// Lower bound of the universe.
    pub const MIN: f64 = 0.0;
    /// Upper bound of the universe.
    pub const MAX: f64 = 1.0;
    /// Discretization step.
    pub const STEP: f64 = 0.01;

    /// `undertraining` term breakpoints.
    pub const UNDERTRAINING: (f64, f64, f64) = (0.0, 0.2, 0.5);
    /// `normal` term breakpoints.
    pub const NORMAL: (f64, f64, f64) = (0.3, 0.55, 0.8);
    /// `overtraining` term breakpoints.
    pub const OVERTRAINING: (f64, f64, f64) = (0.6, 0.8, 1.0);
}
