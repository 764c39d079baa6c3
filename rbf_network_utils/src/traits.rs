/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the trait for scalar kernel evaluation.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

/// A radial kernel evaluated between a one-dimensional target and source position.
pub trait KernelFunction {
    /// Evaluates the kernel for the pair `(target, source)`.
    fn evaluate(&self, target: f64, source: f64) -> f64;
}
