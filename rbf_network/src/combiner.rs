/////////////////////////////////////////////////////////////////////////////////////////////
//
// Applies a weight vector to a design matrix and scores predictions by mean absolute error.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::errors::{RbfError, RbfResult};
use faer::{Col, ColRef, MatRef};

/// Returns the network output `phi @ weights`, one value per row of `phi`.
///
/// # Errors
/// [`RbfError::DimensionMismatch`] if `weights.nrows() != phi.ncols()`.
pub fn combine(weights: ColRef<'_, f64>, phi: MatRef<'_, f64>) -> RbfResult<Col<f64>> {
    if weights.nrows() != phi.ncols() {
        return Err(RbfError::mismatch("combine", phi.ncols(), weights.nrows()));
    }
    Ok(phi * weights)
}

/// Average absolute difference between `predicted` and `target`.
///
/// Returns `0.0` for empty inputs.
///
/// # Errors
/// [`RbfError::DimensionMismatch`] if the two columns differ in length.
pub fn mean_absolute_error(predicted: ColRef<'_, f64>, target: ColRef<'_, f64>) -> RbfResult<f64> {
    if predicted.nrows() != target.nrows() {
        return Err(RbfError::mismatch(
            "mean_absolute_error",
            target.nrows(),
            predicted.nrows(),
        ));
    }
    if target.nrows() == 0 {
        return Ok(0.0);
    }

    let total: f64 = predicted
        .iter()
        .zip(target.iter())
        .map(|(p, t)| (p - t).abs())
        .sum();

    Ok(total / target.nrows() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::{Mat, col, mat};

    #[test]
    fn combine_is_matrix_vector_product() {
        let phi = mat![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let weights = col![0.5, -1.0];

        let out = combine(weights.as_ref(), phi.as_ref()).unwrap();

        assert!(out == col![-1.5, -2.5, -3.5]);
    }

    #[test]
    fn combine_rejects_mismatched_weights() {
        let phi = Mat::<f64>::zeros(10, 7);
        let weights = Col::<f64>::zeros(5);

        let err = combine(weights.as_ref(), phi.as_ref()).unwrap_err();

        assert!(err == RbfError::DimensionMismatch { context: "combine", expected: 7, found: 5 });
    }

    #[test]
    fn combine_on_empty_design_matrix() {
        let phi = Mat::<f64>::zeros(0, 3);
        let weights = Col::<f64>::zeros(3);
        assert!(combine(weights.as_ref(), phi.as_ref()).unwrap().nrows() == 0);
    }

    #[test]
    fn mean_absolute_error_averages_magnitudes() {
        let predicted = col![1.0, -1.0, 0.5, 2.0];
        let target = col![0.0, 0.0, 0.0, 0.0];
        let mae = mean_absolute_error(predicted.as_ref(), target.as_ref()).unwrap();
        assert!(mae == 1.125);
    }

    #[test]
    fn mean_absolute_error_checks_lengths() {
        let predicted = col![1.0, 2.0];
        let target = col![1.0];
        assert!(mean_absolute_error(predicted.as_ref(), target.as_ref()).is_err());
    }
}
