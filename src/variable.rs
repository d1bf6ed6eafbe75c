// ABOUTME: Linguistic variables binding a universe to named triangular terms
// ABOUTME: Inputs carry an open term list; the output is fixed to the three statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

//! Linguistic variables over discretized universes.
//!
//! [`LinguisticVariable`] is an input: a named universe plus ordered
//! triangular terms. [`OutputVariable`] is the consequent side, with exactly
//! one triangle per [`TrainingStatus`] in canonical order.

use crate::errors::ConfigError;
use crate::membership::TriangularMf;
use crate::status::TrainingStatus;
use crate::universe::Universe;

/// An input variable: a named universe with ordered triangular terms.
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<TriangularMf>,
}

impl LinguisticVariable {
    /// Builds a variable from its universe and terms.
    ///
    /// Term order is preserved; [`fuzzify`](Self::fuzzify) and
    /// [`sample`](Self::sample) report degrees in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateTerm`] when two terms share a name.
    pub fn new(
        name: impl Into<String>,
        universe: Universe,
        terms: Vec<TriangularMf>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        check_distinct(&name, terms.iter().map(TriangularMf::term))?;
        Ok(Self {
            name,
            universe,
            terms,
        })
    }

    /// Variable name, e.g. `heart_rate`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The universe of discourse.
    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Terms in declaration order.
    #[must_use]
    pub fn terms(&self) -> &[TriangularMf] {
        &self.terms
    }

    /// Looks up a term by name.
    #[must_use]
    pub fn term(&self, name: &str) -> Option<&TriangularMf> {
        self.terms.iter().find(|mf| mf.term() == name)
    }

    /// Degree of `x` in the named term.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTerm`] when the term is not registered
    /// on this variable.
    pub fn membership_of(&self, term: &str, x: f64) -> Result<f64, ConfigError> {
        self.term(term)
            .map(|mf| mf.degree(x))
            .ok_or_else(|| ConfigError::UnknownTerm {
                variable: self.name.clone(),
                term: term.to_owned(),
            })
    }

    /// Degree of `x` in every term, in declaration order.
    #[must_use]
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.terms
            .iter()
            .map(|mf| (mf.term(), mf.degree(x)))
            .collect()
    }

    /// Sampled membership rows over the whole universe, one row per sample.
    ///
    /// This is the plotting surface: each row pairs a sample point with the
    /// degrees of every term at that point.
    #[must_use]
    pub fn sample(&self) -> Vec<(f64, Vec<(&str, f64)>)> {
        self.universe
            .samples()
            .into_iter()
            .map(|x| (x, self.fuzzify(x)))
            .collect()
    }
}

/// The output variable: one triangle per training status, canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputVariable {
    name: String,
    universe: Universe,
    terms: [TriangularMf; 3],
}

impl OutputVariable {
    /// Builds the output variable; `terms` arrive in [`TrainingStatus::ALL`]
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateTerm`] when two terms share a name.
    pub fn new(
        name: impl Into<String>,
        universe: Universe,
        terms: [TriangularMf; 3],
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        check_distinct(&name, terms.iter().map(TriangularMf::term))?;
        Ok(Self {
            name,
            universe,
            terms,
        })
    }

    /// Variable name, e.g. `training_status`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The universe of discourse.
    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    /// All three terms in canonical order.
    #[must_use]
    pub const fn terms(&self) -> &[TriangularMf; 3] {
        &self.terms
    }

    /// The triangle attached to `status`.
    #[must_use]
    pub fn term_for(&self, status: TrainingStatus) -> &TriangularMf {
        &self.terms[status.index()]
    }

    /// Degrees of `x` per status, in canonical order.
    #[must_use]
    pub fn degrees_at(&self, x: f64) -> [f64; 3] {
        [
            self.terms[0].degree(x),
            self.terms[1].degree(x),
            self.terms[2].degree(x),
        ]
    }

    /// Sampled membership rows over the whole universe, one row per sample.
    #[must_use]
    pub fn sample(&self) -> Vec<(f64, Vec<(&str, f64)>)> {
        self.universe
            .samples()
            .into_iter()
            .map(|x| {
                let degrees = self
                    .terms
                    .iter()
                    .map(|mf| (mf.term(), mf.degree(x)))
                    .collect();
                (x, degrees)
            })
            .collect()
    }
}

fn check_distinct<'a>(
    variable: &str,
    terms: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen: Vec<&str> = Vec::new();
    for term in terms {
        if seen.contains(&term) {
            return Err(ConfigError::DuplicateTerm {
                variable: variable.to_owned(),
                term: term.to_owned(),
            });
        }
        seen.push(term);
    }
    Ok(())
}
