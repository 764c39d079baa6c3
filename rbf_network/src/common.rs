/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines CSV export helpers that hand training traces and approximations to external plotting tools.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use csv::Writer;
use faer::ColRef;
use std::error::Error;

/// Write an online training curve to a CSV file.
///
/// Each row holds an epoch index and the mean absolute error recorded for it,
/// under the headers `Epoch, MeanAbsoluteError`.
///
/// # Arguments
/// * `epochs` - Epoch indices as returned by the online fitter.
/// * `errors` - Mean absolute error for each epoch; must match `epochs` in length.
/// * `filename` - Output CSV filename.
///
/// # Errors
/// Returns an error if the lengths differ or writing to disk fails.
pub fn traces_to_csv(epochs: &[usize], errors: &[f64], filename: &str) -> Result<(), Box<dyn Error>> {
    if epochs.len() != errors.len() {
        return Err(format!(
            "Epoch and error traces must have same length ({} != {})",
            epochs.len(),
            errors.len()
        )
        .into());
    }

    let mut wtr = Writer::from_path(filename)?;
    wtr.write_record(["Epoch", "MeanAbsoluteError"])?;

    for (epoch, error) in epochs.iter().zip(errors.iter()) {
        wtr.write_record(&[epoch.to_string(), error.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write network predictions alongside the true values they approximate.
///
/// Rows are written with headers `X, Approximation, TrueValue`.
///
/// # Arguments
/// * `inputs` - Positions the network was evaluated at.
/// * `predictions` - Network output at each position.
/// * `true_values` - Target function at each position.
/// * `filename` - Output CSV filename.
///
/// # Errors
/// Returns an error if the lengths differ or writing to disk fails.
pub fn approximation_to_csv(
    inputs: &[f64],
    predictions: ColRef<'_, f64>,
    true_values: ColRef<'_, f64>,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let n = inputs.len();
    if predictions.nrows() != n || true_values.nrows() != n {
        return Err("Inputs, predictions and true values must have same length.".into());
    }

    let mut wtr = Writer::from_path(filename)?;
    wtr.write_record(["X", "Approximation", "TrueValue"])?;

    for ((x, p), t) in inputs.iter().zip(predictions.iter()).zip(true_values.iter()) {
        wtr.write_record(&[x.to_string(), p.to_string(), t.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
