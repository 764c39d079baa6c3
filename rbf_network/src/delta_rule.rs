/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the sequential delta rule and the online training loop for RBF network weights.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # delta_rule
//!
//! Online (stochastic) gradient descent for the output weights of an RBF network.
//!
//! A single update moves the weights along the local prediction error of one
//! sample:
//!
//! ```text
//! w <- w + eta * (y_k - phi_k . w) * phi_k
//! ```
//!
//! A pass applies this update to every row of the design matrix in order, and
//! each update is visible to the next sample of the same pass. The training
//! loop repeats passes until the mean absolute error of two consecutive passes
//! differs by no more than the configured tolerance.

use crate::{
    basis,
    combiner::{combine, mean_absolute_error},
    config::{ConvergenceTarget, TrainingParams},
    errors::{RbfError, RbfResult},
    progress::{self, ProgressMsg, ProgressSink},
    signals::{TargetKind, TargetSource},
};
use faer::{Col, ColRef, MatRef, RowRef};
use std::sync::Arc;

/// Why the online training loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStatus {
    /// The error of two consecutive passes differed by at most the tolerance.
    Converged,

    /// The pass limit was hit before the tolerance was met.
    MaxEpochsReached,
}

/// Output of [`train_online`].
#[derive(Debug, Clone)]
pub struct OnlineTrainingResult {
    /// Weights after the final pass.
    pub weights: Col<f64>,

    /// Mean absolute error before training (first entry) and after every pass.
    pub errors: Vec<f64>,

    /// Epoch index matching each entry of `errors`, starting at 1.
    pub epochs: Vec<usize>,

    pub status: TrainingStatus,
}

impl OnlineTrainingResult {
    pub fn converged(&self) -> bool {
        self.status == TrainingStatus::Converged
    }

    /// Error after the final pass.
    pub fn final_error(&self) -> f64 {
        self.errors.last().copied().unwrap_or(f64::NAN)
    }
}

/// Applies one delta rule step for a single sample and returns the new weights.
///
/// # Errors
/// [`RbfError::DimensionMismatch`] if `phi_row` and `weights` differ in length.
pub fn delta_update(
    weights: ColRef<'_, f64>,
    phi_row: RowRef<'_, f64>,
    target: f64,
    learning_rate: f64,
) -> RbfResult<Col<f64>> {
    if phi_row.ncols() != weights.nrows() {
        return Err(RbfError::mismatch("delta_update", weights.nrows(), phi_row.ncols()));
    }

    let mut updated = weights.to_owned();
    apply_delta(&mut updated, phi_row, target, learning_rate);

    Ok(updated)
}

/// Runs one sequential pass of the delta rule over every row of `phi`.
///
/// # Errors
/// [`RbfError::DimensionMismatch`] if `weights` does not match the columns of
/// `phi`, or `targets` does not match its rows.
pub fn delta_pass(
    weights: ColRef<'_, f64>,
    phi: MatRef<'_, f64>,
    targets: ColRef<'_, f64>,
    learning_rate: f64,
) -> RbfResult<Col<f64>> {
    if weights.nrows() != phi.ncols() {
        return Err(RbfError::mismatch("delta_pass (weights)", phi.ncols(), weights.nrows()));
    }
    if targets.nrows() != phi.nrows() {
        return Err(RbfError::mismatch("delta_pass (targets)", phi.nrows(), targets.nrows()));
    }

    let mut updated = weights.to_owned();
    for (row, &target) in phi.row_iter().zip(targets.iter()) {
        apply_delta(&mut updated, row, target, learning_rate);
    }

    Ok(updated)
}

#[inline(always)]
fn apply_delta(weights: &mut Col<f64>, phi_row: RowRef<'_, f64>, target: f64, learning_rate: f64) {
    let prediction: f64 = phi_row
        .iter()
        .zip(weights.as_ref().iter())
        .map(|(p, w)| p * w)
        .sum();

    let step = learning_rate * (target - prediction);

    for (j, p) in phi_row.iter().enumerate() {
        weights[j] += step * p;
    }
}

/// Trains the output weights with repeated delta rule passes.
///
/// The design matrix is built once from `inputs`, `centers` and `sigma`. Each
/// pass trains against a target vector drawn from `source`; what the error is
/// measured against, and whether the target is redrawn between passes, is set
/// by [`TrainingParams::convergence_target`]:
///
/// - `Resampled`: measure against the target used for the pass, then redraw.
/// - `Fixed`: draw once, train and measure against that draw throughout.
/// - `Clean`: redraw every pass, measure against the noise-free function.
///
/// The first trace entry is the error of `initial_weights` at epoch 1. Training
/// stops when two consecutive errors differ by at most `params.tolerance`, or
/// after `params.max_epochs` passes.
///
/// # Parameters
/// - `inputs`: Training positions.
/// - `initial_weights`: Starting weights, one per center.
/// - `centers`: Kernel centers.
/// - `sigma`: Kernel width.
/// - `target_kind`: Function to approximate.
/// - `noisy`: Whether target draws include additive noise.
/// - `source`: Supplier of target draws.
/// - `params`: Learning rate, tolerance, pass limit and convergence target.
/// - `callback`: Optional sink receiving one event per pass.
///
/// # Errors
/// - [`RbfError::InvalidParameter`] for an invalid `sigma`, an empty center
///   set, non-finite inputs, centers or initial weights, or invalid `params`.
///   Also raised as soon as a pass drives the weights or the error to a
///   non-finite value, which happens when `learning_rate` is too large.
/// - [`RbfError::DimensionMismatch`] if `initial_weights` does not have one
///   entry per center.
#[allow(clippy::too_many_arguments)]
pub fn train_online<S: TargetSource>(
    inputs: &[f64],
    initial_weights: ColRef<'_, f64>,
    centers: &[f64],
    sigma: f64,
    target_kind: TargetKind,
    noisy: bool,
    source: &mut S,
    params: &TrainingParams,
    callback: Option<Arc<dyn ProgressSink>>,
) -> RbfResult<OnlineTrainingResult> {
    params.validate()?;
    if centers.is_empty() {
        return Err(RbfError::invalid("centers", "at least one kernel is required"));
    }

    let phi = basis::design_matrix(inputs, centers, sigma)?;

    if initial_weights.nrows() != centers.len() {
        return Err(RbfError::mismatch(
            "train_online (initial weights)",
            centers.len(),
            initial_weights.nrows(),
        ));
    }
    if !initial_weights.iter().all(|w| w.is_finite()) {
        return Err(RbfError::invalid("initial_weights", "all weights must be finite"));
    }

    let clean_target = match params.convergence_target {
        ConvergenceTarget::Clean => Some(target_kind.values(inputs)),
        _ => None,
    };

    let mut weights = initial_weights.to_owned();
    let mut target = source.draw(inputs, target_kind, noisy);

    let output = combine(weights.as_ref(), phi.as_ref())?;
    let reference = clean_target.as_ref().unwrap_or(&target);
    let mut errors = vec![mean_absolute_error(output.as_ref(), reference.as_ref())?];
    let mut epochs = vec![1usize];

    let mut epoch = 1usize;
    let status = loop {
        if epoch > params.max_epochs {
            break TrainingStatus::MaxEpochsReached;
        }
        epoch += 1;

        weights = delta_pass(weights.as_ref(), phi.as_ref(), target.as_ref(), params.learning_rate)?;

        let output = combine(weights.as_ref(), phi.as_ref())?;
        let reference = clean_target.as_ref().unwrap_or(&target);
        let error = mean_absolute_error(output.as_ref(), reference.as_ref())?;

        if !error.is_finite() || !weights.as_ref().iter().all(|w| w.is_finite()) {
            return Err(RbfError::invalid(
                "learning_rate",
                format!("training diverged at epoch {epoch}"),
            ));
        }

        let delta = (errors[errors.len() - 1] - error).abs();
        errors.push(error);
        epochs.push(epoch);

        progress::emit(&callback, ProgressMsg::EpochCompleted { epoch, error, delta });

        if params.convergence_target != ConvergenceTarget::Fixed {
            target = source.draw(inputs, target_kind, noisy);
        }

        if delta <= params.tolerance {
            break TrainingStatus::Converged;
        }
    };

    progress::emit(
        &callback,
        ProgressMsg::TrainingFinished {
            epochs: epoch,
            error: errors[errors.len() - 1],
            converged: status == TrainingStatus::Converged,
        },
    );

    Ok(OnlineTrainingResult {
        weights,
        errors,
        epochs,
        status,
    })
}
