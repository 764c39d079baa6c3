/////////////////////////////////////////////////////////////////////////////////////////////
//
// Example fitting one period of sin(2x) with the delta rule and a square wave with least squares,
// writing training curves and approximations to CSV for plotting.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use rbf_network::{
    RBFModel, RBFNetwork, SignalGenerator, TargetKind, TrainingParams, approximation_to_csv,
    evaluate, mean_absolute_error, traces_to_csv,
    progress::{ProgressMsg, ProgressSink, closure_sink},
};
use rbf_network_utils::arange;
use std::{f64::consts::PI, sync::Arc, thread::JoinHandle};

/// Generates a callback closure_sink and the handle of its listener thread
fn get_callback_sink() -> (Arc<dyn ProgressSink>, JoinHandle<()>) {
    let (sink, listener) = closure_sink(256, |msg| match msg {
        ProgressMsg::EpochCompleted { epoch, error, delta } => {
            println!("Epoch: {:>4}    {:>.5E}    delta {:>.3E}", epoch, error, delta);
        }
        ProgressMsg::TrainingFinished { epochs, error, converged } => {
            println!(
                "Training finished after {} epochs (converged: {}), error {:.5}",
                epochs, converged, error
            );
        }
        ProgressMsg::LeastSquaresSolved { rank, num_weights, residual } => {
            println!("Least squares rank {}/{}, residual {:?}", rank, num_weights, residual);
        }
        ProgressMsg::Message { message } => println!("{message}"),
    });

    (sink, listener)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (callback, listener) = get_callback_sink();

    // Kernels on every training sample over one period
    let mu = arange(0.0, 2.0 * PI, 0.1);
    let sigma = 0.1;
    let x_train = arange(0.0, 2.0 * PI, 0.1);
    let x_test = arange(0.05, 2.0 * PI, 0.1);

    let mut signals = SignalGenerator::new(0.1, Some(42))?;

    // Delta rule on a noisy sinusoid
    let rbf_delta = RBFNetwork::new(mu.len(), 42)?;
    println!("{rbf_delta}");

    let (sinus_test, square_test) = signals.generate(&x_test, false);

    let weights = rbf_delta.init_weights(0.1)?;
    let result = rbf_delta.train_online(
        &x_train,
        weights.as_ref(),
        &mu,
        sigma,
        TargetKind::Sinusoid,
        true,
        &mut signals,
        &TrainingParams::default(),
        Some(callback.clone()),
    )?;
    traces_to_csv(&result.epochs, &result.errors, "delta_training_curve.csv")?;

    let y_test = evaluate(&x_test, result.weights.as_ref(), &mu, sigma)?;
    println!(
        "Delta rule held-out error: {:.5}",
        mean_absolute_error(y_test.as_ref(), sinus_test.as_ref())?
    );
    approximation_to_csv(&x_test, y_test.as_ref(), sinus_test.as_ref(), "delta_rule.csv")?;

    // Least squares on a clean square wave
    let rbf_ls = RBFNetwork::new(mu.len(), 42)?;
    println!("{rbf_ls}");

    let (_sinus, square) = signals.generate(&x_train, false);
    let fit = rbf_ls.train_least_squares(
        &x_train,
        square.as_ref(),
        &mu,
        sigma,
        Some(callback.clone()),
    )?;

    let model = RBFModel::new(mu.clone(), sigma, fit.weights.as_ref())?;
    let y_test = model.predict(&x_test)?;
    println!(
        "Least squares held-out error: {:.5}",
        mean_absolute_error(y_test.as_ref(), square_test.as_ref())?
    );
    approximation_to_csv(&x_test, y_test.as_ref(), square_test.as_ref(), "least_squares.csv")?;
    model.save_model("least_squares_model.json")?;

    // The listener exits once the last sink is gone; wait so every event is printed
    drop(callback);
    listener.join().map_err(|_| "progress listener panicked")?;

    Ok(())
}
