/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the error type shared by the basis evaluator, combiner, and weight fitters.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use std::{error::Error, fmt};

pub type RbfResult<T> = std::result::Result<T, RbfError>;

/// Errors raised by the numerical operations of an RBF network.
///
/// Every error is reported by the operation that detected it. The operations
/// are deterministic in their inputs, so none of these errors are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum RbfError {
    /// A scalar or set-valued parameter is outside its valid domain,
    /// e.g. a non-positive kernel width or an empty center set.
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// The length of a vector does not agree with the shape of the
    /// matrix it is combined with.
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// The least-squares system has no usable solution.
    SingularSystem { reason: String },
}

impl RbfError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RbfError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        RbfError::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

impl fmt::Display for RbfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbfError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{}`: {}", name, reason)
            }
            RbfError::DimensionMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                context, expected, found
            ),
            RbfError::SingularSystem { reason } => {
                write!(f, "singular least-squares system: {}", reason)
            }
        }
    }
}

impl Error for RbfError {}
