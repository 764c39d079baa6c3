/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for Gaussian RBF network approximation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Gaussian Radial Basis Function (RBF) networks for periodic signals.
//!
//! An RBF network approximates a scalar function as a weighted sum of Gaussian
//! bumps placed at fixed centers along the input domain:
//!
//! ```text
//! f(x) = sum_j w_j * exp(-(x - mu_j)^2 / (2 sigma^2))
//! ```
//!
//! The centers `mu` and the shared width `sigma` are chosen by the caller, so
//! only the output weights `w` are learned. Two fitters are provided:
//!
//! - **Delta rule** - online gradient descent, one sample at a time, repeated
//!   over freshly drawn (optionally noisy) targets until the mean absolute
//!   error of consecutive passes stabilises. See [`train_online`].
//! - **Least squares** - a closed-form batch fit through a thin SVD of the
//!   design matrix, robust to closely spaced centers. See [`fit_least_squares`].
//!
//! Weights are always passed in and returned by value; the network
//! configuration ([`RBFNetwork`]) only fixes the number of kernels and the seed
//! used to initialise weights.
//!
//! Built on [`faer`](https://docs.rs/faer/latest/faer/) for linear algebra.
//!
//! # Examples
//!
//! ```
//! use rbf_network::{
//!     RBFNetwork, SignalGenerator, TargetKind, TrainingParams, evaluate, train_least_squares,
//! };
//! use rbf_network_utils::arange;
//! use std::f64::consts::PI;
//!
//! // One period of sin(2x), with a kernel on every training sample
//! let inputs = arange(0.0, 2.0 * PI, 0.1);
//! let centers = inputs.clone();
//! let sigma = 0.1;
//!
//! let mut signals = SignalGenerator::new(0.1, Some(42)).unwrap();
//! let (sinus, _square) = signals.generate(&inputs, false);
//!
//! // Batch fit
//! let fit = train_least_squares(&inputs, sinus.as_ref(), &centers, sigma, None).unwrap();
//!
//! // Online fit from small random weights
//! let network = RBFNetwork::new(centers.len(), 42).unwrap();
//! let weights = network.init_weights(0.1).unwrap();
//! let online = network
//!     .train_online(
//!         &inputs,
//!         weights.as_ref(),
//!         &centers,
//!         sigma,
//!         TargetKind::Sinusoid,
//!         false,
//!         &mut signals,
//!         &TrainingParams::default(),
//!         None,
//!     )
//!     .unwrap();
//!
//! // Score both on held-out points between the training samples
//! let held_out = arange(0.05, 2.0 * PI, 0.1);
//! let batch_predictions = evaluate(&held_out, fit.weights.as_ref(), &centers, sigma).unwrap();
//! let online_predictions = evaluate(&held_out, online.weights.as_ref(), &centers, sigma).unwrap();
//!
//! assert_eq!(batch_predictions.nrows(), held_out.len());
//! assert_eq!(online_predictions.nrows(), held_out.len());
//! ```
mod errors;

mod basis;

mod combiner;

mod delta_rule;

mod least_squares;

mod evaluation;

mod network;

mod model;

mod signals;

mod common;

pub mod config;

pub mod progress;

pub use {
    basis::{design_matrix, design_matrix_from_params, design_matrix_with_kernel},
    combiner::{combine, mean_absolute_error},
    common::{approximation_to_csv, traces_to_csv},
    config::{ConvergenceTarget, TrainingParams, TrainingParamsBuilder},
    delta_rule::{
        OnlineTrainingResult, TrainingStatus, delta_pass, delta_update, train_online,
    },
    errors::{RbfError, RbfResult},
    evaluation::evaluate,
    least_squares::{LeastSquaresFit, fit_least_squares, train_least_squares},
    model::{ModelIOError, RBFModel},
    network::RBFNetwork,
    signals::{SignalGenerator, TargetKind, TargetSource, sinusoid, square_wave},
};
