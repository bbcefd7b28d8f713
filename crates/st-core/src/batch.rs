//! Raw batch data model
//!
//! The mixing collaborator hands over batches as ordered entries of
//! (identifiers, spectra). Entry 0 is the mixed/reference signal; the
//! remaining entries are the per-source contributions for the same time
//! window.

use ndarray::Array3;

use crate::magnitude::Magnitude;

/// Extract the label from a source identifier.
///
/// Identifiers are formatted `<label>/<rest>`; the label is the segment
/// before the first separator. An identifier without a separator is its
/// own label.
pub fn source_label(identifier: &str) -> &str {
    identifier.split_once('/').map_or(identifier, |(label, _)| label)
}

/// One entry of a raw mixed batch: the spectra for a single signal
/// (mixed or per-source) plus one identifier per batch item.
#[derive(Debug, Clone)]
pub struct BatchEntry<T: Magnitude> {
    /// Item identifiers, one per batch item (`<label>/<rest>`)
    pub ids: Vec<String>,

    /// Spectral data shaped (batch × time × frequency)
    pub spectra: Array3<T>,
}

impl<T: Magnitude> BatchEntry<T> {
    /// Create a new batch entry
    pub fn new(ids: Vec<String>, spectra: Array3<T>) -> Self {
        Self { ids, spectra }
    }

    /// Batch size (leading dimension)
    pub fn batch_size(&self) -> usize {
        self.spectra.dim().0
    }
}

/// A raw mixed batch as produced by the mixing collaborator.
///
/// Entry 0 is the mixed/reference signal.
pub type RawBatch<T> = Vec<BatchEntry<T>>;
