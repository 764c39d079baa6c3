/////////////////////////////////////////////////////////////////////////////////////////////
//
// Solves for RBF network weights by SVD-based linear least squares.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # least_squares
//!
//! Closed-form batch fit of the output weights. The system
//! `minimize ||phi @ w - y||^2` is solved through a thin singular value
//! decomposition of `phi` rather than the normal equations, so closely spaced
//! centers (which make `phi` ill-conditioned) degrade the fit gracefully.
//!
//! Singular values below `max(N, M) * eps * s_max` are treated as zero. The
//! minimum-norm solution is returned when the system is rank deficient.

use crate::{
    basis,
    combiner::combine,
    errors::{RbfError, RbfResult},
    progress::{self, ProgressMsg, ProgressSink},
};
use faer::{Col, ColRef, MatRef};
use std::sync::Arc;

/// Output of [`fit_least_squares`].
#[derive(Debug, Clone)]
pub struct LeastSquaresFit {
    /// Fitted weights, one per column of the design matrix.
    pub weights: Col<f64>,

    /// Sum of squared residuals.
    ///
    /// `None` when the system is rank deficient or has no more rows than
    /// columns, in which case the residual carries no information about fit
    /// quality.
    pub residual: Option<f64>,

    /// Numerical rank of the design matrix.
    pub rank: usize,

    /// Singular values of the design matrix in non-increasing order.
    pub singular_values: Vec<f64>,
}

impl LeastSquaresFit {
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.weights.nrows()
    }
}

/// Solves the linear least-squares problem `phi @ weights ~= targets`.
///
/// # Errors
/// - [`RbfError::InvalidParameter`] if `phi` has no columns (no kernels) or no rows (no samples).
/// - [`RbfError::DimensionMismatch`] if `targets.nrows() != phi.nrows()`.
/// - [`RbfError::SingularSystem`] if `phi` or `targets` contain non-finite values,
///   the decomposition fails, or `phi` has numerical rank zero.
pub fn fit_least_squares(
    phi: MatRef<'_, f64>,
    targets: ColRef<'_, f64>,
) -> RbfResult<LeastSquaresFit> {
    let (n, m) = phi.shape();

    if m == 0 {
        return Err(RbfError::invalid("centers", "at least one kernel is required"));
    }
    if n == 0 {
        return Err(RbfError::invalid("inputs", "at least one sample is required"));
    }
    if targets.nrows() != n {
        return Err(RbfError::mismatch("fit_least_squares (targets)", n, targets.nrows()));
    }

    let phi_finite = phi.col_iter().all(|c| c.iter().all(|v| v.is_finite()));
    if !phi_finite || !targets.iter().all(|v| v.is_finite()) {
        return Err(RbfError::SingularSystem {
            reason: "design matrix or targets contain non-finite values".into(),
        });
    }

    let svd = phi.thin_svd().map_err(|e| RbfError::SingularSystem {
        reason: format!("singular value decomposition failed: {:?}", e),
    })?;

    let singular_values: Vec<f64> = svd.S().column_vector().iter().cloned().collect();
    let s_max = singular_values.iter().cloned().fold(0.0, f64::max);
    let cutoff = n.max(m) as f64 * f64::EPSILON * s_max;
    let rank = singular_values.iter().filter(|&&s| s > cutoff).count();

    if rank == 0 {
        return Err(RbfError::SingularSystem {
            reason: "design matrix has numerical rank zero".into(),
        });
    }

    // w = V * diag(1 / s) * U^T * y, dropping directions below the cutoff
    let uty = svd.U().transpose() * targets;
    let scaled = Col::from_fn(singular_values.len(), |i| {
        let s = singular_values[i];
        match s > cutoff {
            true => uty[i] / s,
            false => 0.0,
        }
    });
    let weights = svd.V() * scaled.as_ref();

    let residual = match rank == m && n > m {
        true => {
            let fitted = combine(weights.as_ref(), phi)?;
            Some(
                fitted
                    .as_ref()
                    .iter()
                    .zip(targets.iter())
                    .map(|(f, t)| (f - t).powi(2))
                    .sum::<f64>(),
            )
        }
        false => None,
    };

    Ok(LeastSquaresFit {
        weights,
        residual,
        rank,
        singular_values,
    })
}

/// Builds the design matrix for `inputs` and fits weights against `targets`.
///
/// # Errors
/// Any error of [`basis::design_matrix`] or [`fit_least_squares`].
pub fn train_least_squares(
    inputs: &[f64],
    targets: ColRef<'_, f64>,
    centers: &[f64],
    sigma: f64,
    callback: Option<Arc<dyn ProgressSink>>,
) -> RbfResult<LeastSquaresFit> {
    let phi = basis::design_matrix(inputs, centers, sigma)?;
    let fit = fit_least_squares(phi.as_ref(), targets)?;

    progress::emit(
        &callback,
        ProgressMsg::LeastSquaresSolved {
            rank: fit.rank,
            num_weights: fit.weights.nrows(),
            residual: fit.residual,
        },
    );

    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluation::evaluate, signals::TargetKind};
    use equator::assert;
    use faer::{Mat, col, mat};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rbf_network_utils::arange;
    use std::f64::consts::PI;

    fn max_relative_error(a: ColRef<'_, f64>, b: ColRef<'_, f64>) -> f64 {
        let scale = b.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        a.iter()
            .zip(b.iter())
            .fold(0.0f64, |acc, (x, y)| acc.max((x - y).abs()))
            / scale
    }

    #[test]
    fn recovers_known_weights_exactly() {
        let inputs = arange(0.0, 2.0 * PI, 0.1);
        let centers: Vec<f64> = (0..8).map(|k| k as f64 * PI / 4.0).collect();
        let phi = basis::design_matrix(&inputs, &centers, 0.5).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let w_true = Col::from_fn(centers.len(), |_| rng.random_range(-1.0..1.0));
        let targets = &phi * &w_true;

        let fit = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap();

        assert!(fit.is_full_rank());
        assert!(max_relative_error(fit.weights.as_ref(), w_true.as_ref()) < 1e-8);
        assert!(fit.residual.unwrap() < 1e-20);
    }

    #[test]
    fn residual_is_sum_of_squares_for_overdetermined_system() {
        // Fitting a constant to [0, 2] gives 1 with residual 2.
        let phi = mat![[1.0], [1.0]];
        let targets = col![0.0, 2.0];

        let fit = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap();

        assert!((fit.weights[0] - 1.0).abs() < 1e-12);
        assert!((fit.residual.unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn square_system_has_no_residual() {
        let phi = mat![[2.0, 0.0], [0.0, 4.0]];
        let targets = col![1.0, 1.0];

        let fit = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap();

        assert!(fit.residual.is_none());
        assert!((fit.weights[0] - 0.5).abs() < 1e-12);
        assert!((fit.weights[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn duplicate_centers_are_rank_deficient() {
        let inputs = arange(0.0, 2.0 * PI, 0.1);
        let centers = [1.0, 2.0, 2.0, 3.0];
        let phi = basis::design_matrix(&inputs, &centers, 0.5).unwrap();
        let targets = TargetKind::Sinusoid.values(&inputs);

        let fit = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap();

        assert!(fit.rank == 3);
        assert!(!fit.is_full_rank());
        assert!(fit.residual.is_none());
        // Minimum-norm solution splits the duplicated weight evenly.
        assert!((fit.weights[1] - fit.weights[2]).abs() < 1e-8);
    }

    #[test]
    fn all_zero_design_matrix_is_singular() {
        let phi = Mat::<f64>::zeros(5, 3);
        let targets = col![1.0, 2.0, 3.0, 4.0, 5.0];

        let err = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap_err();

        assert!(matches!(err, RbfError::SingularSystem { .. }));
    }

    #[test]
    fn underflowing_kernels_are_singular() {
        // Every input is far outside the reach of every kernel.
        let inputs = [100.0, 101.0, 102.0];
        let centers = [0.0, 1.0];
        let err = train_least_squares(&inputs, col![1.0, 1.0, 1.0].as_ref(), &centers, 0.1, None)
            .unwrap_err();
        assert!(matches!(err, RbfError::SingularSystem { .. }));
    }

    #[test]
    fn non_finite_targets_are_singular() {
        let phi = mat![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let targets = col![1.0, f64::NAN, 0.0];
        let err = fit_least_squares(phi.as_ref(), targets.as_ref()).unwrap_err();
        assert!(matches!(err, RbfError::SingularSystem { .. }));
    }

    #[test]
    fn empty_systems_are_rejected() {
        let no_kernels = Mat::<f64>::zeros(3, 0);
        let targets = Col::<f64>::zeros(3);
        assert!(matches!(
            fit_least_squares(no_kernels.as_ref(), targets.as_ref()),
            Err(RbfError::InvalidParameter { name: "centers", .. })
        ));

        let no_samples = Mat::<f64>::zeros(0, 3);
        let targets = Col::<f64>::zeros(0);
        assert!(matches!(
            fit_least_squares(no_samples.as_ref(), targets.as_ref()),
            Err(RbfError::InvalidParameter { name: "inputs", .. })
        ));
    }

    #[test]
    fn mismatched_targets_are_rejected() {
        let phi = Mat::<f64>::identity(3, 3);
        let targets = Col::<f64>::zeros(4);
        assert!(matches!(
            fit_least_squares(phi.as_ref(), targets.as_ref()),
            Err(RbfError::DimensionMismatch { expected: 3, found: 4, .. })
        ));
    }

    #[test]
    fn sinusoid_fit_generalises_to_held_out_points() {
        let inputs = arange(0.0, 2.0 * PI, 0.1);
        let centers = inputs.clone();
        let sigma = 0.1;
        let targets = TargetKind::Sinusoid.values(&inputs);

        let fit = train_least_squares(&inputs, targets.as_ref(), &centers, sigma, None).unwrap();

        let held_out = arange(0.05, 2.0 * PI, 0.1);
        let predictions = evaluate(&held_out, fit.weights.as_ref(), &centers, sigma).unwrap();
        let truth = TargetKind::Sinusoid.values(&held_out);

        let mae = crate::combiner::mean_absolute_error(predictions.as_ref(), truth.as_ref()).unwrap();
        assert!(mae < 0.05);
    }
}
