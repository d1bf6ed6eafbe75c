// ABOUTME: Error types for engine assembly and per-evaluation input validation
// ABOUTME: Configuration failures are fatal; input failures reject a single request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! Error types for the fuzzy engine.
//!
//! [`ConfigError`] covers mistakes made while assembling an engine: malformed
//! triangles, unusable universes, duplicate or unknown term names, an empty
//! rule base. These surface once, at construction, and mean the model itself
//! is wrong.
//!
//! [`InputError`] covers a single evaluation request: empty text, text that is
//! not a number, values outside a universe of discourse. These reject the
//! request and leave the engine untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three crisp inputs an evaluation request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Heart rate in beats per minute.
    HeartRate,
    /// Pacing in minutes per kilometre.
    Pacing,
    /// Distance in kilometres.
    Distance,
}

impl InputField {
    /// Human-readable label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeartRate => "Heart Rate",
            Self::Pacing => "Pacing",
            Self::Distance => "Distance",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while assembling an engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Triangle breakpoints must be finite and satisfy `a <= b <= c`.
    #[error("invalid breakpoints for term '{term}': ({a}, {b}, {c}) must satisfy finite a <= b <= c")]
    InvalidBreakpoints {
        /// Term the triangle belongs to.
        term: String,
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },

    /// Universe bounds or step were unusable.
    #[error("invalid universe for '{variable}': min={min}, max={max}, step={step} (require finite min < max and step > 0)")]
    InvalidUniverse {
        /// Variable the universe was built for.
        variable: String,
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
        /// Requested discretization step.
        step: f64,
    },

    /// Two terms on one variable shared a name.
    #[error("duplicate term '{term}' on variable '{variable}'")]
    DuplicateTerm {
        /// Variable carrying the collision.
        variable: String,
        /// The repeated term name.
        term: String,
    },

    /// A lookup referenced a term its variable does not define. Raised by
    /// direct membership queries and by rule resolution at engine assembly.
    #[error("unknown term '{term}' on variable '{variable}'")]
    UnknownTerm {
        /// Variable the lookup ran against.
        variable: String,
        /// The missing term name.
        term: String,
    },

    /// The rule base contained no rules.
    #[error("rule base contains no rules")]
    EmptyRuleBase,
}

/// Errors rejecting a single evaluation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Raw text input was empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Empty {
        /// Field the text belonged to.
        field: InputField,
    },

    /// Raw text failed to parse as a number, or a NaN was passed directly.
    #[error("{field} must be a number (integer or decimal)")]
    NotANumber {
        /// Field the value belonged to.
        field: InputField,
    },

    /// The value fell outside the closed universe range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Field the value belonged to.
        field: InputField,
        /// Inclusive lower bound of the universe.
        min: f64,
        /// Inclusive upper bound of the universe.
        max: f64,
    },
}

impl InputError {
    /// The field that failed validation.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::Empty { field } | Self::NotANumber { field } | Self::OutOfRange { field, .. } => {
                *field
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages_match_validation_contract() {
        let empty = InputError::Empty {
            field: InputField::HeartRate,
        };
        assert_eq!(empty.to_string(), "Heart Rate cannot be empty");

        let not_a_number = InputError::NotANumber {
            field: InputField::Pacing,
        };
        assert_eq!(
            not_a_number.to_string(),
            "Pacing must be a number (integer or decimal)"
        );

        let out_of_range = InputError::OutOfRange {
            field: InputField::Distance,
            min: 0.0,
            max: 42.0,
        };
        assert_eq!(
            out_of_range.to_string(),
            "Distance must be between 0 and 42"
        );
    }

    #[test]
    fn test_input_error_exposes_failing_field() {
        let err = InputError::OutOfRange {
            field: InputField::Pacing,
            min: 3.0,
            max: 9.0,
        };
        assert_eq!(err.field(), InputField::Pacing);
        assert_eq!(err.to_string(), "Pacing must be between 3 and 9");
    }

    #[test]
    fn test_config_error_messages_name_the_offender() {
        let unknown = ConfigError::UnknownTerm {
            variable: "pacing".to_owned(),
            term: "sprint".to_owned(),
        };
        assert_eq!(
            unknown.to_string(),
            "unknown term 'sprint' on variable 'pacing'"
        );

        let duplicate = ConfigError::DuplicateTerm {
            variable: "distance".to_owned(),
            term: "short".to_owned(),
        };
        assert_eq!(
            duplicate.to_string(),
            "duplicate term 'short' on variable 'distance'"
        );

        assert_eq!(
            ConfigError::EmptyRuleBase.to_string(),
            "rule base contains no rules"
        );
    }

    #[test]
    fn test_input_field_serializes_snake_case() {
        let json = serde_json::to_string(&InputField::HeartRate).unwrap();
        assert_eq!(json, "\"heart_rate\"");
    }
}
