/////////////////////////////////////////////////////////////////////////////////////////////
//
// Evaluates a trained RBF network at arbitrary input positions.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{basis, combiner::combine, errors::RbfResult};
use faer::{Col, ColRef};

/// Predicts network outputs at `inputs` for the given weights, centers and width.
///
/// Used identically for weights from the online and the least-squares fitter.
///
/// # Errors
/// - [`RbfError::InvalidParameter`](crate::RbfError) for an invalid `sigma` or
///   non-finite positions.
/// - [`RbfError::DimensionMismatch`](crate::RbfError) if `weights` does not have
///   one entry per center.
pub fn evaluate(
    inputs: &[f64],
    weights: ColRef<'_, f64>,
    centers: &[f64],
    sigma: f64,
) -> RbfResult<Col<f64>> {
    let phi = basis::design_matrix(inputs, centers, sigma)?;
    combine(weights, phi.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RbfError;
    use equator::assert;
    use faer::col;

    #[test]
    fn single_kernel_reproduces_its_weight_at_center() {
        let out = evaluate(&[0.5, 1.5], col![2.0].as_ref(), &[0.5], 0.1).unwrap();
        assert!(out[0] == 2.0);
        assert!(out[1] < 1e-10);
    }

    #[test]
    fn overlapping_kernels_sum() {
        let out = evaluate(&[0.0], col![1.0, 1.0].as_ref(), &[-0.1, 0.1], 0.1).unwrap();
        assert!((out[0] - 2.0 * (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn rejects_wrong_number_of_weights() {
        let err = evaluate(&[0.0, 1.0], col![1.0, 1.0, 1.0].as_ref(), &[0.0, 1.0], 0.1)
            .unwrap_err();
        assert!(matches!(err, RbfError::DimensionMismatch { expected: 2, found: 3, .. }));
    }

    #[test]
    fn empty_inputs_give_empty_predictions() {
        let out = evaluate(&[], col![1.0].as_ref(), &[0.0], 0.1).unwrap();
        assert!(out.nrows() == 0);
    }
}
