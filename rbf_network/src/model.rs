/////////////////////////////////////////////////////////////////////////////////////////////
//
// Bundles trained weights with their kernel configuration and handles JSON model persistence.
//
// Created on: 15 Nov 2025     Author: Daniel Owen 
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License. 
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    basis,
    combiner::combine,
    errors::{RbfError, RbfResult},
};
use faer::{Col, ColRef};
use rbf_network_utils::KernelParams;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// A trained network: kernel centers, shared kernel width and output weights.
///
/// Produced from the weights returned by either fitter, and used to predict
/// at new positions or to persist the fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RBFModel {
    /// Kernel centers, one per weight.
    pub centers: Vec<f64>,

    /// Parameters of the Gaussian kernel shared by every center.
    pub kernel: KernelParams,

    weights: Vec<f64>,
}

impl RBFModel {
    /// Creates a model from fitted weights.
    ///
    /// # Errors
    /// - [`RbfError::InvalidParameter`] if `sigma` is not positive and finite.
    /// - [`RbfError::DimensionMismatch`] if there is not one weight per center.
    pub fn new(centers: Vec<f64>, sigma: f64, weights: ColRef<'_, f64>) -> RbfResult<Self> {
        basis::validate_sigma(sigma)?;
        if weights.nrows() != centers.len() {
            return Err(RbfError::mismatch("model weights", centers.len(), weights.nrows()));
        }

        Ok(Self {
            centers,
            kernel: KernelParams::builder().sigma(sigma).build(),
            weights: weights.iter().cloned().collect(),
        })
    }

    /// Returns a copy of the output weights.
    pub fn weights(&self) -> Col<f64> {
        Col::from_fn(self.weights.len(), |i| self.weights[i])
    }

    /// Predicts network outputs at `inputs`.
    ///
    /// # Errors
    /// Any error of [`evaluate`](crate::evaluate) for this model's centers and kernel.
    pub fn predict(&self, inputs: &[f64]) -> RbfResult<Col<f64>> {
        let phi = basis::design_matrix_from_params(inputs, &self.centers, &self.kernel)?;
        combine(self.weights().as_ref(), phi.as_ref())
    }

    fn validate(&self) -> RbfResult<()> {
        basis::validate_sigma(self.kernel.sigma)?;
        if self.weights.len() != self.centers.len() {
            return Err(RbfError::mismatch(
                "model weights",
                self.centers.len(),
                self.weights.len(),
            ));
        }
        Ok(())
    }

    /// Save the model to a versioned **JSON envelope**.
    ///
    /// ### Errors
    /// - Returns `ModelIOError::{Create, Serialize, Flush}` as appropriate.
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> ModelIOResult<()> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| ModelIOError::Create {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        let mut w = BufWriter::new(file);

        let env = JsonEnvelopeRef {
            format: JSON_FORMAT_NAME,
            version: JSON_VERSION,
            model: self,
        };

        serde_json::to_writer_pretty(&mut w, &env).map_err(|e| ModelIOError::Serialize {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        w.flush().map_err(|e| ModelIOError::Flush {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Load a model from a versioned **JSON envelope**, validating format & version.
    ///
    /// ### Validation
    /// - Fails if `format != JSON_FORMAT_NAME` or `version != JSON_VERSION`.
    /// - Fails if the stored kernel width or weight count is unusable.
    ///
    /// ### Errors
    /// - Returns `ModelIOError::{Open, Parse, FormatMismatch, VersionMismatch, Invalid}`
    ///   as appropriate.
    pub fn load_model<P: AsRef<Path>>(path: P) -> ModelIOResult<Self> {
        let path_ref = path.as_ref();

        let file = File::open(path_ref).map_err(|e| ModelIOError::Open {
            path: path_ref.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let env: JsonEnvelopeOwned<Self> =
            serde_json::from_reader(reader).map_err(|e| ModelIOError::Parse {
                path: path_ref.to_path_buf(),
                source: e,
            })?;

        if env.format != JSON_FORMAT_NAME {
            return Err(ModelIOError::FormatMismatch {
                path: path_ref.to_path_buf(),
                found: env.format,
                expected: JSON_FORMAT_NAME,
            });
        }

        if env.version != JSON_VERSION {
            return Err(ModelIOError::VersionMismatch {
                path: path_ref.to_path_buf(),
                found: env.version,
                expected: JSON_VERSION,
            });
        }

        let model = env.model;
        model.validate().map_err(|e| ModelIOError::Invalid {
            path: path_ref.to_path_buf(),
            source: e,
        })?;

        Ok(model)
    }
}

const JSON_FORMAT_NAME: &str = "rbf_network.json";
const JSON_VERSION: u32 = 1;

/// Borrowing envelope for SAVE (no clone of the model).
#[derive(Serialize)]
struct JsonEnvelopeRef<'a, T: ?Sized> {
    format: &'static str,
    version: u32,
    #[serde(flatten)]
    model: &'a T,
}

/// Owning envelope for LOAD (generic over the concrete model).
#[derive(Serialize, Deserialize)]
struct JsonEnvelopeOwned<T> {
    format: String,
    version: u32,
    #[serde(flatten)]
    model: T,
}

type ModelIOResult<T> = std::result::Result<T, ModelIOError>;

/// Errors that can occur when saving or loading an [`RBFModel`].
#[derive(Debug)]
pub enum ModelIOError {
    /// Failed to create the target file before writing a model.
    Create {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to open an existing model file for reading.
    Open {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to flush buffered output when finishing a write.
    Flush {
        path: PathBuf,
        source: io::Error,
    },
    /// Error serializing the in-memory model to JSON.
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Error parsing JSON when reading a model from disk.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The JSON `format` field does not match the expected model format.
    FormatMismatch {
        path: PathBuf,
        found: String,
        expected: &'static str,
    },
    /// The JSON `version` field does not match the supported version.
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
    /// The stored model parsed but cannot be used for prediction.
    Invalid {
        path: PathBuf,
        source: RbfError,
    },
}

impl fmt::Display for ModelIOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelIOError::Create { path, source } => {
                write!(f, "creating {}: {}", path.display(), source)
            }
            ModelIOError::Open { path, source } => {
                write!(f, "opening {}: {}", path.display(), source)
            }
            ModelIOError::Flush { path, source } => {
                write!(f, "flushing {}: {}", path.display(), source)
            }
            ModelIOError::Serialize { path, source } => {
                write!(f, "serializing JSON to {}: {}", path.display(), source)
            }
            ModelIOError::Parse { path, source } => {
                write!(f, "parsing JSON in {}: {}", path.display(), source)
            }
            ModelIOError::FormatMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "unsupported format {:?} (expected {:?}) in {}",
                found,
                expected,
                path.display()
            ),
            ModelIOError::VersionMismatch {
                path,
                found,
                expected,
            } => write!(
                f,
                "unsupported version {} (expected {}) in {}",
                found,
                expected,
                path.display()
            ),
            ModelIOError::Invalid { path, source } => {
                write!(f, "invalid model in {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ModelIOError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelIOError::Create { source, .. }
            | ModelIOError::Open { source, .. }
            | ModelIOError::Flush { source, .. } => Some(source),
            ModelIOError::Serialize { source, .. } | ModelIOError::Parse { source, .. } => {
                Some(source)
            }
            ModelIOError::Invalid { source, .. } => Some(source),
            ModelIOError::FormatMismatch { .. } | ModelIOError::VersionMismatch { .. } => None,
        }
    }
}
