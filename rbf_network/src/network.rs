/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the network configuration and weight initialisation for a Gaussian RBF network.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Network configuration.
//!
//! An [`RBFNetwork`] only fixes the number of kernels and the random seed used
//! to initialise weights. It never holds weights itself: every fitting and
//! evaluation routine takes weights as an explicit input and returns new ones.

use crate::{
    config::TrainingParams,
    delta_rule::{self, OnlineTrainingResult},
    errors::{RbfError, RbfResult},
    least_squares::{self, LeastSquaresFit},
    progress::ProgressSink,
    signals::{TargetKind, TargetSource},
};
use faer::{Col, ColRef};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Shape and seed of a single-hidden-layer Gaussian RBF network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RBFNetwork {
    dimension: usize,
    seed: u64,
}

impl RBFNetwork {
    /// Creates a network with `dimension` kernels.
    ///
    /// # Errors
    /// [`RbfError::InvalidParameter`] if `dimension` is zero.
    pub fn new(dimension: usize, seed: u64) -> RbfResult<Self> {
        if dimension == 0 {
            return Err(RbfError::invalid("dimension", "a network needs at least one kernel"));
        }
        Ok(Self { dimension, seed })
    }

    /// Number of kernels, and therefore of weights.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws initial weights from `N(0, std^2)`.
    ///
    /// The generator is seeded from the network seed, so repeated calls return
    /// the same weights.
    ///
    /// # Errors
    /// [`RbfError::InvalidParameter`] if `std` is negative or not finite.
    pub fn init_weights(&self, std: f64) -> RbfResult<Col<f64>> {
        if !(std.is_finite() && std >= 0.0) {
            return Err(RbfError::invalid(
                "std",
                format!("must be non-negative and finite, got {}", std),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        Ok(Col::from_fn(self.dimension, |_| {
            let z: f64 = rng.sample(StandardNormal);
            z * std
        }))
    }

    /// Checks that `weights` and `centers` both match the network dimension.
    pub fn check_shape(&self, weights: Option<ColRef<'_, f64>>, centers: &[f64]) -> RbfResult<()> {
        if centers.len() != self.dimension {
            return Err(RbfError::mismatch("network centers", self.dimension, centers.len()));
        }
        if let Some(weights) = weights {
            if weights.nrows() != self.dimension {
                return Err(RbfError::mismatch("network weights", self.dimension, weights.nrows()));
            }
        }
        Ok(())
    }

    /// Trains with the delta rule after checking shapes against this network.
    ///
    /// See [`delta_rule::train_online`].
    #[allow(clippy::too_many_arguments)]
    pub fn train_online<S: TargetSource>(
        &self,
        inputs: &[f64],
        weights: ColRef<'_, f64>,
        centers: &[f64],
        sigma: f64,
        target_kind: TargetKind,
        noisy: bool,
        source: &mut S,
        params: &TrainingParams,
        callback: Option<Arc<dyn ProgressSink>>,
    ) -> RbfResult<OnlineTrainingResult> {
        self.check_shape(Some(weights), centers)?;
        delta_rule::train_online(
            inputs, weights, centers, sigma, target_kind, noisy, source, params, callback,
        )
    }

    /// Fits by least squares after checking shapes against this network.
    ///
    /// See [`least_squares::train_least_squares`].
    pub fn train_least_squares(
        &self,
        inputs: &[f64],
        targets: ColRef<'_, f64>,
        centers: &[f64],
        sigma: f64,
        callback: Option<Arc<dyn ProgressSink>>,
    ) -> RbfResult<LeastSquaresFit> {
        self.check_shape(None, centers)?;
        least_squares::train_least_squares(inputs, targets, centers, sigma, callback)
    }
}

impl fmt::Display for RBFNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number of nodes: {}\nseed: {}", self.dimension, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalGenerator;
    use equator::assert;
    use rbf_network_utils::arange;
    use std::f64::consts::PI;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            RBFNetwork::new(0, 42),
            Err(RbfError::InvalidParameter { name: "dimension", .. })
        ));
    }

    #[test]
    fn init_weights_is_seeded() {
        let network = RBFNetwork::new(20, 42).unwrap();
        let a = network.init_weights(0.1).unwrap();
        let b = network.init_weights(0.1).unwrap();
        let other = RBFNetwork::new(20, 43).unwrap().init_weights(0.1).unwrap();

        assert!(a.nrows() == 20);
        assert!(a == b);
        assert!(a != other);
    }

    #[test]
    fn init_weights_scales_with_std() {
        let network = RBFNetwork::new(10, 1).unwrap();
        let unit = network.init_weights(1.0).unwrap();
        let small = network.init_weights(0.1).unwrap();

        for i in 0..10 {
            assert!((small[i] - 0.1 * unit[i]).abs() < 1e-15);
        }
        assert!(network.init_weights(0.0).unwrap() == Col::<f64>::zeros(10));
        assert!(network.init_weights(-1.0).is_err());
    }

    #[test]
    fn display_lists_nodes_and_seed() {
        let network = RBFNetwork::new(63, 42).unwrap();
        assert!(network.to_string() == "Number of nodes: 63\nseed: 42");
    }

    #[test]
    fn shape_checks_cover_centers_and_weights() {
        let network = RBFNetwork::new(3, 0).unwrap();
        let weights = network.init_weights(0.1).unwrap();

        assert!(network.check_shape(Some(weights.as_ref()), &[0.0, 1.0, 2.0]).is_ok());
        assert!(network.check_shape(None, &[0.0, 1.0]).is_err());
        assert!(network
            .check_shape(Some(Col::<f64>::zeros(2).as_ref()), &[0.0, 1.0, 2.0])
            .is_err());
    }

    #[test]
    fn train_online_through_network() {
        let inputs = arange(0.0, 2.0 * PI, 0.1);
        let centers = inputs.clone();
        let network = RBFNetwork::new(centers.len(), 42).unwrap();
        let weights = network.init_weights(0.1).unwrap();
        let mut source = SignalGenerator::new(0.1, Some(42)).unwrap();

        let result = network
            .train_online(
                &inputs,
                weights.as_ref(),
                &centers,
                0.1,
                TargetKind::Sinusoid,
                false,
                &mut source,
                &TrainingParams::default(),
                None,
            )
            .unwrap();

        assert!(result.converged());
        assert!(result.weights.nrows() == network.dimension());
    }

    #[test]
    fn train_least_squares_rejects_wrong_center_count() {
        let network = RBFNetwork::new(4, 42).unwrap();
        let inputs = arange(0.0, 1.0, 0.1);
        let targets = TargetKind::Sinusoid.values(&inputs);

        let err = network
            .train_least_squares(&inputs, targets.as_ref(), &[0.0, 0.5], 0.2, None)
            .unwrap_err();

        assert!(matches!(err, RbfError::DimensionMismatch { .. }));
    }
}
