// ABOUTME: Training status classification produced by the engine
// ABOUTME: Carries the canonical tie-break order, display labels, and coaching advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! The output classification of an evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final classification of a training session.
///
/// The variant order is meaningful: when two output terms hold equal
/// membership at the crisp value, the earlier variant in
/// [`TrainingStatus::ALL`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Training stimulus below what the runner can absorb.
    Undertraining,
    /// Training load in a sustainable range.
    Normal,
    /// Training load beyond recovery capacity.
    Overtraining,
}

impl TrainingStatus {
    /// Canonical order used for tie-breaking and output term layout.
    pub const ALL: [Self; 3] = [Self::Undertraining, Self::Normal, Self::Overtraining];

    /// Lowercase label used as the output variable term name.
    #[must_use]
    pub const fn term_label(self) -> &'static str {
        match self {
            Self::Undertraining => "undertraining",
            Self::Normal => "normal",
            Self::Overtraining => "overtraining",
        }
    }

    /// Coaching advice attached to the classification.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Undertraining => "Increase intensity or distance gradually.",
            Self::Normal => "Maintain current training regimen.",
            Self::Overtraining => "Rest or reduce intensity to prevent injury.",
        }
    }

    /// Position of the variant in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Undertraining => 0,
            Self::Normal => 1,
            Self::Overtraining => 2,
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Undertraining => "Undertraining",
            Self::Normal => "Normal",
            Self::Overtraining => "Overtraining",
        };
        f.write_str(label)
    }
}
