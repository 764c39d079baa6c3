/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the Gaussian RBF kernel evaluated on scalar positions.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{KernelFunction, KernelParams};

/// Gaussian RBF kernel with `phi(r) = exp(-r^2 / (2 sigma^2))`.
#[derive(Clone, Debug, Copy)]
pub struct GaussianRbfKernel {
    // user input
    pub sigma: f64,

    // derived (computed once)
    inv_two_sigma_sq: f64, // 1 / (2 sigma^2)
}

impl GaussianRbfKernel {
    #[inline(always)]
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            inv_two_sigma_sq: 1.0 / (2.0 * sigma * sigma),
        }
    }

    #[inline(always)]
    pub fn eval_r2(&self, r2: f64) -> f64 {
        (-r2 * self.inv_two_sigma_sq).exp()
    }

    #[inline(always)]
    pub fn phi(&self, r: f64) -> f64 {
        self.eval_r2(r * r)
    }
}

impl KernelFunction for GaussianRbfKernel {
    #[inline(always)]
    fn evaluate(&self, target: f64, source: f64) -> f64 {
        let r = crate::get_distance(target, source);
        self.phi(r)
    }
}

impl From<&KernelParams> for GaussianRbfKernel {
    #[inline(always)]
    fn from(p: &KernelParams) -> Self {
        Self::new(p.sigma)
    }
}
