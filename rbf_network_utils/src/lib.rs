/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports the Gaussian kernel, kernel parameters, and helper functions used by rbf_network.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities for the [`rbf_network`] crate
//!
//! Holds the scalar Gaussian kernel that every basis function in the network
//! shares, the parameter types used to configure it, and a handful of small
//! helpers for building one-dimensional sample grids.
mod rbf_kernels;
mod traits;
mod utils;
mod kernel_helpers;

/// Implemented kernels for use in the [`rbf_network`] crate.
pub mod kernels {
    pub use super::rbf_kernels::*;
}

pub use {
    kernel_helpers::{KernelParams, KernelParamsBuilder},
    utils::{arange, get_distance},
    traits::KernelFunction,
};
