//! # Sequence-model adapter
//!
//! The statistical sequence labeler is an external collaborator. This
//! module defines the two-operation contract the core programs against;
//! the concrete CRF implementation lives in the trainer crate and the core
//! is fully testable against a stub.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parser::features::TokenFeatures;

/// Handle to a trained model, addressed by the path of its model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    path: PathBuf,
}

impl ModelHandle {
    /// Wrap a model file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the model file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the model file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Training parameters forwarded to the model implementation.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// L2 regularization coefficient, when the implementation supports it.
    pub c2: Option<f64>,
    /// Emit the implementation's own training progress output.
    pub verbose: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            c2: None,
            verbose: false,
        }
    }
}

/// The opaque sequence-labeling capability.
///
/// `train` consumes per-line feature sequences paired one-to-one with
/// per-line IOB tag sequences and writes a model file; `tag` labels one
/// line's feature sequence with a previously trained model. A missing or
/// unreadable model file is a fatal error — implementations must not
/// substitute a default tag sequence.
pub trait SequenceModel {
    /// Train a model from aligned feature/tag sequences, writing it to
    /// `output`.
    fn train(
        &self,
        features: &[Vec<TokenFeatures>],
        tags: &[Vec<String>],
        config: &TrainConfig,
        output: &Path,
    ) -> Result<ModelHandle>;

    /// Tag a single line's feature sequence. The returned sequence has
    /// exactly one tag per feature vector.
    fn tag(&self, features: &[TokenFeatures], model: &ModelHandle) -> Result<Vec<String>>;
}
