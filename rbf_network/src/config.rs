/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares configuration types for the online (delta rule) training loop.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Declares configuration types for the online (delta rule) training loop.
use crate::errors::{RbfError, RbfResult};
use serde::{Deserialize, Serialize};

/// Which target the online fitter measures its error against after each pass.
///
/// The online fitter decides when to stop by comparing the mean absolute error
/// of consecutive passes. With noisy data, the choice of reference changes what
/// "converged" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergenceTarget {
    /// Train and measure against the current draw, then redraw a fresh target
    /// before the next pass.
    Resampled,

    /// Draw a single target before training and reuse it for every pass and
    /// every error measurement.
    Fixed,

    /// Train against fresh draws each pass but measure the error against the
    /// noise-free target function.
    Clean,
}

impl Default for ConvergenceTarget {
    fn default() -> Self {
        ConvergenceTarget::Resampled
    }
}

/// Parameters controlling the online (delta rule) training loop.
///
/// ### Default Values
/// - `learning_rate`: `0.08`
/// - `tolerance`: `0.01`
/// - `max_epochs`: `10_000`
/// - `convergence_target`: [`ConvergenceTarget::Resampled`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Step size of each single-sample weight update.
    pub learning_rate: f64,

    /// Training stops once the mean absolute error of two consecutive
    /// passes differs by no more than this amount.
    pub tolerance: f64,

    /// Upper bound on the number of training passes. The loop returns with
    /// [`TrainingStatus::MaxEpochsReached`](crate::TrainingStatus) when hit.
    pub max_epochs: usize,

    /// Target the error is measured against after each pass.
    pub convergence_target: ConvergenceTarget,
}

impl Default for TrainingParams {
    fn default() -> Self {
        TrainingParams {
            learning_rate: 0.08,
            tolerance: 0.01,
            max_epochs: 10_000,
            convergence_target: ConvergenceTarget::Resampled,
        }
    }
}

impl TrainingParams {
    /// Returns a new [`TrainingParamsBuilder`] populated with the defaults.
    pub fn builder() -> TrainingParamsBuilder {
        TrainingParamsBuilder::new()
    }

    /// Checks that every parameter lies in its valid domain.
    pub fn validate(&self) -> RbfResult<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(RbfError::invalid(
                "learning_rate",
                format!("must be positive and finite, got {}", self.learning_rate),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(RbfError::invalid(
                "tolerance",
                format!("must be non-negative and finite, got {}", self.tolerance),
            ));
        }
        if self.max_epochs == 0 {
            return Err(RbfError::invalid("max_epochs", "must allow at least one pass"));
        }
        Ok(())
    }
}

/// A convenience builder for constructing a [`TrainingParams`] instance.
///
/// The builder should be called via the [`TrainingParams::builder`] method.
///
/// See [`TrainingParams`] for details on each field.
#[derive(Debug, Clone, Copy)]
pub struct TrainingParamsBuilder {
    pub learning_rate: f64,
    pub tolerance: f64,
    pub max_epochs: usize,
    pub convergence_target: ConvergenceTarget,
}

impl TrainingParamsBuilder {
    fn new() -> Self {
        let defaults = TrainingParams::default();
        Self {
            learning_rate: defaults.learning_rate,
            tolerance: defaults.tolerance,
            max_epochs: defaults.max_epochs,
            convergence_target: defaults.convergence_target,
        }
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the convergence tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of training passes.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// Sets the target the error is measured against.
    pub fn convergence_target(mut self, convergence_target: ConvergenceTarget) -> Self {
        self.convergence_target = convergence_target;
        self
    }

    /// Builds and returns a [`TrainingParams`] instance.
    pub fn build(self) -> TrainingParams {
        TrainingParams {
            learning_rate: self.learning_rate,
            tolerance: self.tolerance,
            max_epochs: self.max_epochs,
            convergence_target: self.convergence_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn defaults_match_reference_training_loop() {
        let params = TrainingParams::default();
        assert!(params.learning_rate == 0.08);
        assert!(params.tolerance == 0.01);
        assert!(params.convergence_target == ConvergenceTarget::Resampled);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let params = TrainingParams::builder()
            .learning_rate(0.2)
            .tolerance(1e-4)
            .max_epochs(50)
            .convergence_target(ConvergenceTarget::Fixed)
            .build();

        assert!(params.learning_rate == 0.2);
        assert!(params.tolerance == 1e-4);
        assert!(params.max_epochs == 50);
        assert!(params.convergence_target == ConvergenceTarget::Fixed);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_rate = TrainingParams::builder().learning_rate(0.0).build();
        assert!(matches!(
            bad_rate.validate(),
            Err(RbfError::InvalidParameter { name: "learning_rate", .. })
        ));

        let bad_tol = TrainingParams::builder().tolerance(-1.0).build();
        assert!(bad_tol.validate().is_err());

        let no_epochs = TrainingParams::builder().max_epochs(0).build();
        assert!(no_epochs.validate().is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let params = TrainingParams::builder()
            .convergence_target(ConvergenceTarget::Clean)
            .build();
        let json = serde_json::to_string(&params).unwrap();
        let back: TrainingParams = serde_json::from_str(&json).unwrap();
        assert!(back == params);
    }
}
