/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides parameter and builder types for configuring the Gaussian RBF kernel.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use serde::{Deserialize, Serialize};

/// Parameter values for the Gaussian kernel shared by every basis function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelParams {
    /// Width of each Gaussian bump, in the same units as the input positions.
    ///
    /// Smaller values restrict each basis function to a narrow neighbourhood of
    /// its center, larger values produce smoother, broader overlap between
    /// neighbouring kernels. Typically chosen close to the spacing of the centers.
    pub sigma: f64,
}

impl KernelParams {
    /// Begins building a [`KernelParams`] instance.
    pub fn builder() -> KernelParamsBuilder {
        KernelParamsBuilder { sigma: 1.0 }
    }

    /// Returns `true` when `sigma` is a usable kernel width.
    pub fn is_valid(&self) -> bool {
        self.sigma.is_finite() && self.sigma > 0.0
    }
}

/// Builder for [`KernelParams`] that provides sensible defaults.
#[derive(Debug, Clone, Copy)]
pub struct KernelParamsBuilder {
    sigma: f64,
}

impl KernelParamsBuilder {
    /// Sets the `sigma` parameter on the builder.
    pub fn sigma(mut self, v: f64) -> Self {
        self.sigma = v;
        self
    }

    /// Finalises the builder into a [`KernelParams`] value.
    pub fn build(self) -> KernelParams {
        assert!(self.sigma.is_finite() && self.sigma > 0.0);
        KernelParams { sigma: self.sigma }
    }
}
