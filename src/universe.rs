// ABOUTME: Discretized universes of discourse with inclusive bounds
// ABOUTME: Samples are generated as min + i*step so repeated runs are bit-identical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! Discretized universes of discourse.
//!
//! A [`Universe`] is a closed interval `[min, max]` sampled at a fixed step.
//! The sample count is fixed at construction, so every evaluation sees the
//! same grid and produces the same floating-point results.

use crate::errors::ConfigError;

/// A closed interval `[min, max]` discretized at a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    /// Builds the universe for `variable`; the name only appears in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUniverse`] when a bound or the step is
    /// non-finite, when `min >= max`, or when `step <= 0`.
    pub fn new(variable: &str, min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() || min >= max || step <= 0.0 {
            return Err(ConfigError::InvalidUniverse {
                variable: variable.to_owned(),
                min,
                max,
                step,
            });
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound, inclusive.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Distance between adjacent samples.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples in the discretization.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// The sample points `min + i * step`, ascending.
    #[must_use]
    pub fn samples(&self) -> Vec<f64> {
        (0..self.sample_count())
            .map(|i| self.step.mul_add(i as f64, self.min))
            .collect()
    }

    /// Whether `x` lies inside the closed interval. Non-finite values are out.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x.is_finite() && x >= self.min && x <= self.max
    }

    /// Midpoint of the interval, the crisp fallback when no rule fires.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.min.midpoint(self.max)
    }
}
