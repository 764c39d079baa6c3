/////////////////////////////////////////////////////////////////////////////////////////////
//
// Generates sinusoid and square-wave target values, optionally with additive Gaussian noise.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Target signals for training and scoring an RBF network.
//!
//! Both signals have period `pi`: the sinusoid is `sin(2x)` and the square wave
//! is the sign of the same oscillation with a 50% duty cycle, i.e. `+1` for
//! the first half of every period and `-1` for the second half.

use crate::errors::{RbfError, RbfResult};
use faer::Col;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Selects which periodic function the network is trained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Sinusoid,
    SquareWave,
}

impl TargetKind {
    /// Noise-free value of the target function at `x`.
    #[inline(always)]
    pub fn value(&self, x: f64) -> f64 {
        match self {
            TargetKind::Sinusoid => sinusoid(x),
            TargetKind::SquareWave => square_wave(x),
        }
    }

    /// Noise-free values of the target function at every input.
    pub fn values(&self, inputs: &[f64]) -> Col<f64> {
        Col::from_fn(inputs.len(), |i| self.value(inputs[i]))
    }
}

/// `sin(2x)`.
#[inline(always)]
pub fn sinusoid(x: f64) -> f64 {
    (2.0 * x).sin()
}

/// Square wave of period `pi` that is `+1` on `[0, pi/2)` and `-1` on `[pi/2, pi)`.
#[inline(always)]
pub fn square_wave(x: f64) -> f64 {
    let phase = (2.0 * x).rem_euclid(2.0 * PI);
    match phase < PI {
        true => 1.0,
        false => -1.0,
    }
}

/// Source of target vectors consumed by the online fitter.
///
/// Each call may return a different vector (e.g. fresh noise), which is what
/// the online fitter relies on when it redraws its target between passes.
pub trait TargetSource {
    /// Returns target values for `inputs`.
    fn draw(&mut self, inputs: &[f64], kind: TargetKind, noisy: bool) -> Col<f64>;
}

/// Produces sinusoid and square-wave samples with optional i.i.d. Gaussian noise.
///
/// Reproducibility of noisy draws requires a fixed seed at construction time.
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    noise_std: f64,
    rng: StdRng,
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self {
            noise_std: 0.1,
            rng: StdRng::seed_from_u64(42),
        }
    }
}

impl SignalGenerator {
    /// Creates a new generator.
    ///
    /// # Parameters
    /// - `noise_std`: standard deviation of the additive noise applied to noisy draws.
    /// - `seed`: Optional random seed.
    ///   - If `Some(seed)` is provided, noisy draws are reproducible across runs.
    ///   - If `None`, the generator is seeded from the operating system's randomness source.
    ///
    /// # Errors
    /// Returns [`RbfError::InvalidParameter`] if `noise_std` is negative or not finite.
    pub fn new(noise_std: f64, seed: Option<u64>) -> RbfResult<Self> {
        if !(noise_std.is_finite() && noise_std >= 0.0) {
            return Err(RbfError::invalid(
                "noise_std",
                format!("must be non-negative and finite, got {}", noise_std),
            ));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self { noise_std, rng })
    }

    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    /// Returns `(sinusoid, square_wave)` values at every input.
    ///
    /// When `noisy` is set, each value of both signals gets its own independent
    /// draw from `N(0, noise_std^2)`; the sinusoid noise is drawn first.
    pub fn generate(&mut self, inputs: &[f64], noisy: bool) -> (Col<f64>, Col<f64>) {
        let mut sinus = TargetKind::Sinusoid.values(inputs);
        let mut square = TargetKind::SquareWave.values(inputs);

        if noisy {
            self.add_noise(&mut sinus);
            self.add_noise(&mut square);
        }

        (sinus, square)
    }

    fn add_noise(&mut self, values: &mut Col<f64>) {
        for i in 0..values.nrows() {
            let z: f64 = self.rng.sample(StandardNormal);
            values[i] += z * self.noise_std;
        }
    }
}

impl TargetSource for SignalGenerator {
    fn draw(&mut self, inputs: &[f64], kind: TargetKind, noisy: bool) -> Col<f64> {
        let (sinus, square) = self.generate(inputs, noisy);
        match kind {
            TargetKind::Sinusoid => sinus,
            TargetKind::SquareWave => square,
        }
    }
}
