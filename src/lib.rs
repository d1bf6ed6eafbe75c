// ABOUTME: Main library entry point for the FuzzyStride training-status engine
// ABOUTME: Re-exports the evaluator, variables, rules, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

#![deny(unsafe_code)]

//! # FuzzyStride
//!
//! A Mamdani fuzzy inference engine that classifies a runner's training
//! status from three session measurements: heart rate, pacing, and distance.
//!
//! The pipeline is the classic one: crisp inputs are fuzzified through
//! overlapping triangular terms, a 27-rule base fires with the min t-norm,
//! each consequent curve is clipped at its firing strength, the clipped
//! curves aggregate pointwise with max, and the centroid of the aggregate
//! becomes the crisp training-status score on a 0-to-1 scale. The score then
//! classifies as undertraining, normal, or overtraining, each with a
//! coaching recommendation.
//!
//! Everything is deterministic: the output universe is discretized once at
//! construction, and the same input always yields bit-identical results.
//!
//! ## Example Usage
//!
//! ```rust
//! use fuzzystride::{RunInput, TrainingEvaluator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let evaluator = TrainingEvaluator::standard()?;
//!
//!     let result = evaluator.evaluate(RunInput {
//!         heart_rate: 150.0,
//!         pacing: 5.0,
//!         distance: 15.0,
//!     })?;
//!
//!     println!(
//!         "{} (score {:.2}): {}",
//!         result.status,
//!         result.crisp_value,
//!         result.recommendation()
//!     );
//!     Ok(())
//! }
//! ```

/// Calibration constants for the standard runner model
pub mod constants;

/// The Mamdani evaluator and its result types
pub mod engine;

/// Configuration and input error types
pub mod errors;

/// Triangular membership functions
pub mod membership;

/// Rules and the standard 27-rule base
pub mod rules;

/// The training status classification
pub mod status;

/// Discretized universes of discourse
pub mod universe;

/// Input and output linguistic variables
pub mod variable;

pub use engine::{EvaluationResult, FiredRule, OutputPeaks, RunInput, TrainingEvaluator};
pub use errors::{ConfigError, InputError, InputField};
pub use membership::TriangularMf;
pub use rules::{Rule, RuleBase};
pub use status::TrainingStatus;
pub use universe::Universe;
pub use variable::{LinguisticVariable, OutputVariable};
