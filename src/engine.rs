// ABOUTME: Mamdani evaluator wiring variables and rules into a training-status pipeline
// ABOUTME: Fuzzify, fire with min, clip, aggregate with max, centroid-defuzzify, classify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! The Mamdani inference engine.
//!
//! [`TrainingEvaluator`] owns the three input variables, the output variable,
//! and the rule base. Construction resolves every rule against the variables
//! once and samples the output term curves once; evaluation is then a pure
//! function of the inputs, and the same input always produces bit-identical
//! results.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants;
use crate::errors::{ConfigError, InputError, InputField};
use crate::membership::TriangularMf;
use crate::rules::RuleBase;
use crate::status::TrainingStatus;
use crate::universe::Universe;
use crate::variable::{LinguisticVariable, OutputVariable};

/// One evaluation request: the three crisp inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunInput {
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Pacing in minutes per kilometre.
    pub pacing: f64,
    /// Distance in kilometres.
    pub distance: f64,
}

/// A rule that contributed nonzero strength, in rule-base order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiredRule {
    /// 1-based index into the rule base.
    pub index: usize,
    /// Firing strength in `(0, 1]`.
    pub strength: f64,
    /// Human-readable rule sentence, e.g. `Rule 1: IF Distance is Short ...`.
    pub description: String,
}

/// Peak clipped activation per output term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputPeaks {
    /// Peak of the undertraining consequents.
    pub undertraining: f64,
    /// Peak of the normal consequents.
    pub normal: f64,
    /// Peak of the overtraining consequents.
    pub overtraining: f64,
}

impl OutputPeaks {
    /// The peak belonging to `status`.
    #[must_use]
    pub const fn for_status(self, status: TrainingStatus) -> f64 {
        match status {
            TrainingStatus::Undertraining => self.undertraining,
            TrainingStatus::Normal => self.normal,
            TrainingStatus::Overtraining => self.overtraining,
        }
    }

    fn slot_mut(&mut self, status: TrainingStatus) -> &mut f64 {
        match status {
            TrainingStatus::Undertraining => &mut self.undertraining,
            TrainingStatus::Normal => &mut self.normal,
            TrainingStatus::Overtraining => &mut self.overtraining,
        }
    }
}

/// Everything one evaluation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The inputs the result was computed from.
    pub input: RunInput,
    /// Centroid of the aggregated output curve, in `[0, 1]`.
    pub crisp_value: f64,
    /// Classification of the crisp value.
    pub status: TrainingStatus,
    /// Rules with strictly positive firing strength, in rule order.
    pub fired_rules: Vec<FiredRule>,
    /// Peak clipped activation per output term.
    pub peaks: OutputPeaks,
    /// Aggregated membership curve over the output universe samples.
    pub aggregate: Vec<f64>,
}

impl EvaluationResult {
    /// Coaching advice for the classified status.
    #[must_use]
    pub const fn recommendation(&self) -> &'static str {
        self.status.recommendation()
    }
}

/// A rule resolved against the variables: term triangles copied in, trace
/// text prebuilt.
#[derive(Debug, Clone)]
struct CompiledRule {
    index: usize,
    distance: TriangularMf,
    pacing: TriangularMf,
    heart_rate: TriangularMf,
    status: TrainingStatus,
    description: String,
}

/// Mamdani evaluator for runner training status.
#[derive(Debug, Clone)]
pub struct TrainingEvaluator {
    heart_rate: LinguisticVariable,
    pacing: LinguisticVariable,
    distance: LinguisticVariable,
    output: OutputVariable,
    rule_base: RuleBase,
    compiled: Vec<CompiledRule>,
    output_samples: Vec<f64>,
    output_curves: [Vec<f64>; 3],
}

impl TrainingEvaluator {
    /// Builds the evaluator with the standard calibration and 27-rule base.
    ///
    /// # Errors
    ///
    /// The standard model is internally consistent, so this only fails if the
    /// built-in calibration itself is broken; the `Result` keeps the signature
    /// aligned with [`new`](Self::new) for custom assemblies.
    pub fn standard() -> Result<Self, ConfigError> {
        let heart_rate = LinguisticVariable::new(
            "heart_rate",
            Universe::new(
                "heart_rate",
                constants::heart_rate::MIN,
                constants::heart_rate::MAX,
                constants::heart_rate::STEP,
            )?,
            vec![
                triangle("low", constants::heart_rate::LOW)?,
                triangle("moderate", constants::heart_rate::MODERATE)?,
                triangle("high", constants::heart_rate::HIGH)?,
            ],
        )?;
        let pacing = LinguisticVariable::new(
            "pacing",
            Universe::new(
                "pacing",
                constants::pacing::MIN,
                constants::pacing::MAX,
                constants::pacing::STEP,
            )?,
            vec![
                triangle("fast", constants::pacing::FAST)?,
                triangle("moderate", constants::pacing::MODERATE)?,
                triangle("slow", constants::pacing::SLOW)?,
            ],
        )?;
        let distance = LinguisticVariable::new(
            "distance",
            Universe::new(
                "distance",
                constants::distance::MIN,
                constants::distance::MAX,
                constants::distance::STEP,
            )?,
            vec![
                triangle("short", constants::distance::SHORT)?,
                triangle("medium", constants::distance::MEDIUM)?,
                triangle("long", constants::distance::LONG)?,
            ],
        )?;
        let output = OutputVariable::new(
            "training_status",
            Universe::new(
                "training_status",
                constants::training_status::MIN,
                constants::training_status::MAX,
                constants::training_status::STEP,
            )?,
            [
                triangle(
                    TrainingStatus::Undertraining.term_label(),
                    constants::training_status::UNDERTRAINING,
                )?,
                triangle(
                    TrainingStatus::Normal.term_label(),
                    constants::training_status::NORMAL,
                )?,
                triangle(
                    TrainingStatus::Overtraining.term_label(),
                    constants::training_status::OVERTRAINING,
                )?,
            ],
        )?;
        Self::new(heart_rate, pacing, distance, output, RuleBase::standard())
    }

    /// Assembles an evaluator from parts.
    ///
    /// Every rule resolves against the variables here: each antecedent term
    /// must exist on its variable, and the resolved triangles are copied into
    /// the rule so evaluation never performs lookups. The output term curves
    /// are sampled once over the output universe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTerm`] when a rule references a term its
    /// variable does not define.
    pub fn new(
        heart_rate: LinguisticVariable,
        pacing: LinguisticVariable,
        distance: LinguisticVariable,
        output: OutputVariable,
        rule_base: RuleBase,
    ) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(rule_base.len());
        for (i, rule) in rule_base.rules().iter().enumerate() {
            let index = i + 1;
            compiled.push(CompiledRule {
                index,
                distance: resolve_term(&distance, rule.distance())?,
                pacing: resolve_term(&pacing, rule.pacing())?,
                heart_rate: resolve_term(&heart_rate, rule.heart_rate())?,
                status: rule.status(),
                description: format!("Rule {index}: {rule}"),
            });
        }

        let output_samples = output.universe().samples();
        let output_curves = TrainingStatus::ALL
            .map(|status| sample_curve(output.term_for(status), &output_samples));

        debug!(
            rules = compiled.len(),
            output_samples = output_samples.len(),
            "training evaluator assembled"
        );

        Ok(Self {
            heart_rate,
            pacing,
            distance,
            output,
            rule_base,
            compiled,
            output_samples,
            output_curves,
        })
    }

    /// The heart rate input variable.
    #[must_use]
    pub const fn heart_rate(&self) -> &LinguisticVariable {
        &self.heart_rate
    }

    /// The pacing input variable.
    #[must_use]
    pub const fn pacing(&self) -> &LinguisticVariable {
        &self.pacing
    }

    /// The distance input variable.
    #[must_use]
    pub const fn distance(&self) -> &LinguisticVariable {
        &self.distance
    }

    /// The output variable.
    #[must_use]
    pub const fn output(&self) -> &OutputVariable {
        &self.output
    }

    /// The rule base, in firing order.
    #[must_use]
    pub const fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    /// The output universe samples the aggregate curve is computed over.
    #[must_use]
    pub fn output_samples(&self) -> &[f64] {
        &self.output_samples
    }

    /// Runs the full Mamdani pipeline on one input.
    ///
    /// Fields are validated in heart rate, pacing, distance order and the
    /// first failure wins. Every rule is then fired with the min t-norm, its
    /// consequent curve clipped at the firing strength, and the clipped
    /// curves folded together pointwise with max. The crisp value is the
    /// discrete centroid of that aggregate; when no rule produces output
    /// mass, the midpoint of the output universe stands in.
    ///
    /// # Errors
    ///
    /// Rejects NaN as [`InputError::NotANumber`] and anything outside a
    /// variable universe, infinities included, as [`InputError::OutOfRange`].
    pub fn evaluate(&self, input: RunInput) -> Result<EvaluationResult, InputError> {
        let heart_rate = validate(
            InputField::HeartRate,
            input.heart_rate,
            self.heart_rate.universe(),
        )?;
        let pacing = validate(InputField::Pacing, input.pacing, self.pacing.universe())?;
        let distance = validate(InputField::Distance, input.distance, self.distance.universe())?;

        let mut aggregate = vec![0.0_f64; self.output_samples.len()];
        let mut peaks = OutputPeaks {
            undertraining: 0.0,
            normal: 0.0,
            overtraining: 0.0,
        };
        let mut fired_rules = Vec::new();

        for rule in &self.compiled {
            let strength = rule
                .distance
                .degree(distance)
                .min(rule.pacing.degree(pacing))
                .min(rule.heart_rate.degree(heart_rate));

            if strength > 0.0 {
                fired_rules.push(FiredRule {
                    index: rule.index,
                    strength,
                    description: rule.description.clone(),
                });
            }

            // Zero-strength rules fold in an all-zero clipped curve.
            let curve = &self.output_curves[rule.status.index()];
            let mut rule_peak = 0.0_f64;
            for (acc, &degree) in aggregate.iter_mut().zip(curve) {
                let clipped = strength.min(degree);
                rule_peak = rule_peak.max(clipped);
                *acc = acc.max(clipped);
            }
            let slot = peaks.slot_mut(rule.status);
            *slot = slot.max(rule_peak);
        }

        let mut numerator = 0.0_f64;
        let mut denominator = 0.0_f64;
        for (&x, &mu) in self.output_samples.iter().zip(&aggregate) {
            numerator = x.mul_add(mu, numerator);
            denominator += mu;
        }

        let crisp_value = if denominator > 0.0 {
            numerator / denominator
        } else {
            let midpoint = self.output.universe().midpoint();
            warn!(
                midpoint,
                "no rule produced output mass, falling back to the universe midpoint"
            );
            midpoint
        };

        let status = self.classify(crisp_value);
        debug!(
            heart_rate,
            pacing,
            distance,
            crisp_value,
            status = %status,
            fired = fired_rules.len(),
            "training status evaluated"
        );

        Ok(EvaluationResult {
            input,
            crisp_value,
            status,
            fired_rules,
            peaks,
            aggregate,
        })
    }

    /// Parses raw text fields and evaluates.
    ///
    /// Text goes through the same checks an interactive frontend applies:
    /// empty or whitespace-only entries, unparseable numbers, and
    /// out-of-range values are all rejected with the field that failed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] or [`InputError::NotANumber`] for bad
    /// text, plus everything [`evaluate`](Self::evaluate) rejects.
    pub fn evaluate_text(
        &self,
        heart_rate: &str,
        pacing: &str,
        distance: &str,
    ) -> Result<EvaluationResult, InputError> {
        let input = RunInput {
            heart_rate: parse_field(InputField::HeartRate, heart_rate)?,
            pacing: parse_field(InputField::Pacing, pacing)?,
            distance: parse_field(InputField::Distance, distance)?,
        };
        self.evaluate(input)
    }

    /// Membership of `crisp` in each output term, earliest status winning
    /// ties.
    fn classify(&self, crisp: f64) -> TrainingStatus {
        let degrees = self.output.degrees_at(crisp);
        let mut best = (TrainingStatus::ALL[0], degrees[0]);
        for (status, degree) in TrainingStatus::ALL.into_iter().zip(degrees).skip(1) {
            if degree > best.1 {
                best = (status, degree);
            }
        }
        best.0
    }
}

fn triangle(term: &str, (a, b, c): (f64, f64, f64)) -> Result<TriangularMf, ConfigError> {
    TriangularMf::new(term, a, b, c)
}

fn resolve_term(variable: &LinguisticVariable, term: &str) -> Result<TriangularMf, ConfigError> {
    variable
        .term(term)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownTerm {
            variable: variable.name().to_owned(),
            term: term.to_owned(),
        })
}

fn sample_curve(mf: &TriangularMf, samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|&x| mf.degree(x)).collect()
}

fn validate(field: InputField, value: f64, universe: &Universe) -> Result<f64, InputError> {
    if value.is_nan() {
        return Err(InputError::NotANumber { field });
    }
    if !universe.contains(value) {
        return Err(InputError::OutOfRange {
            field,
            min: universe.min(),
            max: universe.max(),
        });
    }
    Ok(value)
}

fn parse_field(field: InputField, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { field });
    }
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    #[test]
    fn test_standard_engine_assembles() {
        let engine = TrainingEvaluator::standard().unwrap();
        assert_eq!(engine.rule_base().len(), 27);
        assert_eq!(engine.output_samples().len(), 101);
        assert_eq!(engine.heart_rate().terms().len(), 3);
        assert_eq!(engine.output().name(), "training_status");
    }

    #[test]
    fn test_unknown_rule_term_is_a_config_error() {
        let engine = TrainingEvaluator::standard().unwrap();
        let bogus = RuleBase::new(vec![Rule::new(
            "short",
            "slow",
            "sprint",
            TrainingStatus::Normal,
        )])
        .unwrap();
        let err = TrainingEvaluator::new(
            engine.heart_rate().clone(),
            engine.pacing().clone(),
            engine.distance().clone(),
            engine.output().clone(),
            bogus,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownTerm {
                variable: "heart_rate".to_owned(),
                term: "sprint".to_owned(),
            }
        );
    }

    #[test]
    fn test_classify_breaks_ties_toward_undertraining() {
        // At 0.0 every output term is at zero degree, so the earliest
        // status in canonical order must win.
        let engine = TrainingEvaluator::standard().unwrap();
        assert_eq!(engine.classify(0.0), TrainingStatus::Undertraining);
    }

    #[test]
    fn test_parse_field_categories() {
        assert_eq!(
            parse_field(InputField::HeartRate, ""),
            Err(InputError::Empty {
                field: InputField::HeartRate
            })
        );
        assert_eq!(
            parse_field(InputField::Pacing, "   "),
            Err(InputError::Empty {
                field: InputField::Pacing
            })
        );
        assert_eq!(
            parse_field(InputField::Distance, "abc"),
            Err(InputError::NotANumber {
                field: InputField::Distance
            })
        );
        assert_eq!(parse_field(InputField::HeartRate, " 150.5 "), Ok(150.5));
    }

    #[test]
    fn test_validate_rejects_nan_before_range() {
        let engine = TrainingEvaluator::standard().unwrap();
        let err = validate(
            InputField::HeartRate,
            f64::NAN,
            engine.heart_rate().universe(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: InputField::HeartRate
            }
        );
    }

    #[test]
    fn test_smoke_evaluation() {
        let engine = TrainingEvaluator::standard().unwrap();
        let result = engine
            .evaluate(RunInput {
                heart_rate: 150.0,
                pacing: 5.0,
                distance: 15.0,
            })
            .unwrap();
        assert_eq!(result.status, TrainingStatus::Normal);
        assert_eq!(result.recommendation(), "Maintain current training regimen.");
    }
}
