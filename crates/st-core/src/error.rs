//! Error types for batch preparation

use thiserror::Error;

/// Batch preparation error types
#[derive(Error, Debug)]
pub enum TrainError {
    /// Label not present in the registry
    #[error("Unknown label: {label}")]
    UnknownLabel { label: String },

    /// Array shapes disagree
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Selector references a time bin outside the spectrum
    #[error("Selector index {index} out of range for {time_bins} time bins")]
    SelectorOutOfRange { index: usize, time_bins: usize },

    /// Mixing collaborator returned no entries
    #[error("Mixer returned an empty batch")]
    EmptyBatch,

    /// Mixing collaborator failed
    #[error("Mixer failed: {0}")]
    MixerFailed(String),
}

/// Result type for batch preparation
pub type TrainResult<T> = Result<T, TrainError>;
