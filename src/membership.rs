// ABOUTME: Triangular membership functions with total, closed-form degree evaluation
// ABOUTME: Construction validates finite ordered breakpoints; degenerate shoulders are legal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! Triangular membership functions.
//!
//! A triangle `(a, b, c)` rises linearly from zero at `a` to its peak at `b`
//! and falls back to zero at `c`. Degenerate shoulders (`a == b` or `b == c`)
//! give right-angle ramps, and `a == b == c` is a crisp spike. Evaluation is
//! total: every non-NaN input maps to a degree in `[0, 1]`, NaN maps to zero.

use crate::errors::ConfigError;

/// A triangular membership function labelled with its term name.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularMf {
    term: String,
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularMf {
    /// Builds the triangle for `term` with breakpoints `(a, b, c)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBreakpoints`] unless all three
    /// breakpoints are finite and `a <= b <= c`.
    pub fn new(term: impl Into<String>, a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        let term = term.into();
        if !a.is_finite() || !b.is_finite() || !c.is_finite() || a > b || b > c {
            return Err(ConfigError::InvalidBreakpoints { term, a, b, c });
        }
        Ok(Self { term, a, b, c })
    }

    /// Term name this triangle fuzzifies.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The `(a, b, c)` breakpoints.
    #[must_use]
    pub const fn breakpoints(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Membership degree of `x`.
    ///
    /// The peak is checked before the feet so degenerate triangles still
    /// report full membership at `b`. Outside the open interval `(a, c)` the
    /// degree is zero, feet included, and NaN fuzzifies to zero.
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        if x == self.b {
            return 1.0;
        }
        if x <= self.a || x >= self.c {
            return 0.0;
        }
        if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}
