/////////////////////////////////////////////////////////////////////////////////////////////
//
// Supplies general-purpose helpers for one-dimensional sample grids and distances.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

/// Returns evenly spaced values within the half-open interval `[start, stop)`.
///
/// The number of samples is `ceil((stop - start) / step)`, so the final value is
/// always strictly below `stop` for a positive step. Returns an empty vector when
/// the interval is empty or `step` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use rbf_network_utils::arange;
///
/// let grid = arange(0.0, 1.0, 0.25);
///
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75]);
/// ```
#[inline(always)]
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !(stop > start) {
        return Vec::new();
    }

    let num = ((stop - start) / step).ceil() as usize;

    (0..num).map(|i| start + i as f64 * step).collect()
}

/// Returns the Euclidean distance between two scalar positions.
///
/// # Examples
///
/// ```
/// use rbf_network_utils::get_distance;
///
/// assert_eq!(get_distance(-1.0, 2.0), 3.0);
/// ```
#[inline(always)]
pub fn get_distance(target: f64, source: f64) -> f64 {
    (target - source).abs()
}
