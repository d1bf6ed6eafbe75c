// ABOUTME: Mamdani rule representation and the standard 27-rule base
// ABOUTME: Rules are declarative data; resolution against variables happens at assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! The rule base.
//!
//! Each [`Rule`] pairs one antecedent term per input variable with a
//! consequent [`TrainingStatus`]. The standard base enumerates all 27 term
//! combinations, so any in-range input activates at least one rule. Rules are
//! plain data here; term names resolve against the variables when an engine
//! is assembled.

use std::fmt;

use crate::errors::ConfigError;
use crate::status::TrainingStatus;

/// Antecedent and consequent table of the standard rule base, in firing
/// order: `(distance, pacing, heart_rate, status)`.
const STANDARD_TABLE: [(&str, &str, &str, TrainingStatus); 27] = [
    // short distance
    ("short", "slow", "low", TrainingStatus::Undertraining),
    ("short", "slow", "moderate", TrainingStatus::Undertraining),
    ("short", "slow", "high", TrainingStatus::Normal),
    ("short", "moderate", "low", TrainingStatus::Undertraining),
    ("short", "moderate", "moderate", TrainingStatus::Normal),
    ("short", "moderate", "high", TrainingStatus::Normal),
    ("short", "fast", "low", TrainingStatus::Normal),
    ("short", "fast", "moderate", TrainingStatus::Normal),
    ("short", "fast", "high", TrainingStatus::Overtraining),
    // medium distance
    ("medium", "slow", "low", TrainingStatus::Undertraining),
    ("medium", "slow", "moderate", TrainingStatus::Normal),
    ("medium", "slow", "high", TrainingStatus::Normal),
    ("medium", "moderate", "low", TrainingStatus::Normal),
    ("medium", "moderate", "moderate", TrainingStatus::Normal),
    ("medium", "moderate", "high", TrainingStatus::Overtraining),
    ("medium", "fast", "low", TrainingStatus::Normal),
    ("medium", "fast", "moderate", TrainingStatus::Overtraining),
    ("medium", "fast", "high", TrainingStatus::Overtraining),
    // long distance
    ("long", "slow", "low", TrainingStatus::Normal),
    ("long", "slow", "moderate", TrainingStatus::Normal),
    ("long", "slow", "high", TrainingStatus::Overtraining),
    ("long", "moderate", "low", TrainingStatus::Normal),
    ("long", "moderate", "moderate", TrainingStatus::Overtraining),
    ("long", "moderate", "high", TrainingStatus::Overtraining),
    ("long", "fast", "low", TrainingStatus::Normal),
    ("long", "fast", "moderate", TrainingStatus::Overtraining),
    ("long", "fast", "high", TrainingStatus::Overtraining),
];

/// A single IF-AND-THEN rule over the three input variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    distance: String,
    pacing: String,
    heart_rate: String,
    status: TrainingStatus,
}

impl Rule {
    /// Builds a rule from antecedent term names and a consequent status.
    #[must_use]
    pub fn new(
        distance: impl Into<String>,
        pacing: impl Into<String>,
        heart_rate: impl Into<String>,
        status: TrainingStatus,
    ) -> Self {
        Self {
            distance: distance.into(),
            pacing: pacing.into(),
            heart_rate: heart_rate.into(),
            status,
        }
    }

    /// Distance antecedent term.
    #[must_use]
    pub fn distance(&self) -> &str {
        &self.distance
    }

    /// Pacing antecedent term.
    #[must_use]
    pub fn pacing(&self) -> &str {
        &self.pacing
    }

    /// Heart rate antecedent term.
    #[must_use]
    pub fn heart_rate(&self) -> &str {
        &self.heart_rate
    }

    /// Consequent training status.
    #[must_use]
    pub const fn status(&self) -> TrainingStatus {
        self.status
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF Distance is {} AND Pacing is {} AND Heart Rate is {} THEN Training Status is {}",
            capitalize(&self.distance),
            capitalize(&self.pacing),
            capitalize(&self.heart_rate),
            self.status
        )
    }
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// An ordered, non-empty collection of rules.
///
/// Rule indices are 1-based everywhere they surface: traces, errors, and
/// [`describe`](Self::describe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Wraps a list of rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRuleBase`] when `rules` is empty.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::EmptyRuleBase);
        }
        Ok(Self { rules })
    }

    /// The standard 27-rule base covering every term combination.
    #[must_use]
    pub fn standard() -> Self {
        let rules = STANDARD_TABLE
            .iter()
            .map(|&(distance, pacing, heart_rate, status)| {
                Rule::new(distance, pacing, heart_rate, status)
            })
            .collect();
        Self { rules }
    }

    /// Rules in firing order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the base holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up a rule by its 1-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        index.checked_sub(1).and_then(|i| self.rules.get(i))
    }

    /// Trace line for the 1-based `index`, e.g. `Rule 3: IF Distance is ...`.
    #[must_use]
    pub fn describe(&self, index: usize) -> Option<String> {
        self.get(index).map(|rule| format!("Rule {index}: {rule}"))
    }
}
