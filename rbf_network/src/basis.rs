/////////////////////////////////////////////////////////////////////////////////////////////
//
// Builds the Gaussian design matrix for a set of scalar inputs and kernel centers.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # basis
//!
//! Evaluates every (input, center) pair of a one-dimensional RBF network.
//! Row `i`, column `j` of the resulting design matrix holds the activation of
//! kernel `j` at input `i`:
//!
//! ```text
//! PHI[i, j] = exp(-(x_i - mu_j)^2 / (2 sigma^2))
//! ```

use crate::errors::{RbfError, RbfResult};
use faer::Mat;
use rbf_network_utils::{KernelFunction, KernelParams, kernels::GaussianRbfKernel};

/// Returns the Gaussian design matrix of shape `(inputs.len(), centers.len())`.
///
/// Either slice may be empty, in which case the returned matrix has zero rows
/// or columns.
///
/// # Errors
/// - [`RbfError::InvalidParameter`] if `sigma` is not a positive finite number,
///   or if any input or center is not finite.
pub fn design_matrix(inputs: &[f64], centers: &[f64], sigma: f64) -> RbfResult<Mat<f64>> {
    design_matrix_from_params(inputs, centers, &KernelParams { sigma })
}

/// Same as [`design_matrix`], with the kernel width taken from `params`.
pub fn design_matrix_from_params(
    inputs: &[f64],
    centers: &[f64],
    params: &KernelParams,
) -> RbfResult<Mat<f64>> {
    validate_sigma(params.sigma)?;
    validate_finite("inputs", inputs)?;
    validate_finite("centers", centers)?;

    let kernel = GaussianRbfKernel::from(params);

    Ok(design_matrix_with_kernel(inputs, centers, &kernel))
}

/// Evaluates `kernel` for every (input, center) pair without any validation.
pub fn design_matrix_with_kernel<K: KernelFunction>(
    inputs: &[f64],
    centers: &[f64],
    kernel: &K,
) -> Mat<f64> {
    Mat::from_fn(inputs.len(), centers.len(), |i, j| {
        kernel.evaluate(inputs[i], centers[j])
    })
}

pub(crate) fn validate_sigma(sigma: f64) -> RbfResult<()> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(RbfError::invalid(
            "sigma",
            format!("kernel width must be positive and finite, got {}", sigma),
        ));
    }
    Ok(())
}

fn validate_finite(name: &'static str, values: &[f64]) -> RbfResult<()> {
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(RbfError::invalid(
            name,
            format!("value at index {} is not finite ({})", idx, values[idx]),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::{mat, utils::approx::*};

    #[test]
    fn entries_match_closed_form() {
        let inputs = [0.0, 0.5, 1.0];
        let centers = [0.0, 1.0];
        let sigma = 0.5;

        let phi = design_matrix(&inputs, &centers, sigma).unwrap();

        let g = |d: f64| (-(d * d) / (2.0 * sigma * sigma)).exp();
        let expected = mat![
            [g(0.0), g(1.0)],
            [g(0.5), g(0.5)],
            [g(1.0), g(0.0)],
        ];

        let approx_eq = CwiseMat(ApproxEq::eps() * 16.0);
        assert!(&phi ~ &expected);
    }

    #[test]
    fn symmetric_about_center() {
        let center = 1.0;
        for x in [0.25, 0.5, 0.875, 1.5, 3.0] {
            let left = design_matrix(&[x], &[center], 0.3).unwrap();
            let right = design_matrix(&[2.0 * center - x], &[center], 0.3).unwrap();
            assert!((left[(0, 0)] - right[(0, 0)]).abs() < 1e-15);
        }
    }

    #[test]
    fn zero_sigma_is_rejected() {
        let err = design_matrix(&[0.0, 0.1], &[0.0], 0.0).unwrap_err();
        assert!(matches!(err, RbfError::InvalidParameter { name: "sigma", .. }));
    }

    #[test]
    fn negative_and_nan_sigma_are_rejected() {
        assert!(design_matrix(&[0.0], &[0.0], -0.1).is_err());
        assert!(design_matrix(&[0.0], &[0.0], f64::NAN).is_err());
        assert!(design_matrix(&[0.0], &[0.0], f64::INFINITY).is_err());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let err = design_matrix(&[0.0, f64::NAN], &[0.0], 0.1).unwrap_err();
        assert!(matches!(err, RbfError::InvalidParameter { name: "inputs", .. }));

        let err = design_matrix(&[0.0], &[f64::INFINITY], 0.1).unwrap_err();
        assert!(matches!(err, RbfError::InvalidParameter { name: "centers", .. }));
    }

    #[test]
    fn empty_inputs_or_centers_give_empty_matrix() {
        let phi = design_matrix(&[], &[0.0, 1.0], 0.1).unwrap();
        assert!(phi.nrows() == 0);
        assert!(phi.ncols() == 2);

        let phi = design_matrix(&[0.0, 1.0, 2.0], &[], 0.1).unwrap();
        assert!(phi.nrows() == 3);
        assert!(phi.ncols() == 0);
    }
}
