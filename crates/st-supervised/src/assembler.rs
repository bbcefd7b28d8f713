//! Supervised batch assembly
//!
//! Orchestrates one batch request: raw mixed batch from the mixing
//! collaborator → dominance mask → global label-index matrix.

use log::debug;
use ndarray::{Array2, Array3};

use st_core::{Magnitude, RawBatch, Selector, TrainError, TrainResult};

use crate::embedding::EmbeddingInitializer;
use crate::labeler::AggregatingLabeler;
use crate::mask::DominanceMaskBuilder;

/// Mixing collaborator: synchronizes the per-source streams and mixes
/// them into a composite signal.
///
/// `next_batch` blocks until a complete [`RawBatch`] is available; entry 0
/// is the mixed/reference signal, the rest are per-source contributions
/// for the same time window.
pub trait BatchMixer {
    /// Spectral element type (real magnitudes or complex STFT bins)
    type Elem: Magnitude;

    /// Produce the next raw mixed batch of `num_samples` items
    fn next_batch(&mut self, num_samples: usize) -> TrainResult<RawBatch<Self::Elem>>;
}

/// One assembled training batch
#[derive(Debug, Clone)]
pub struct SupervisedBatch<T: Magnitude> {
    /// Mixed/reference signal shaped (batch × time × frequency)
    pub mixed: Array3<T>,

    /// Dominance mask shaped (batch × sources × selected elements),
    /// values in {0, 1}
    pub mask: Array3<f32>,

    /// Global label indices shaped (sources × batch)
    pub labels: Array2<usize>,
}

/// Assembles supervised batches from a mixing collaborator and a global
/// label registry.
pub struct SupervisedBatchAssembler<M> {
    mixer: M,
    labeler: AggregatingLabeler,
}

impl<M: BatchMixer> SupervisedBatchAssembler<M> {
    /// Create an assembler over a mixer and the aggregated labeler for
    /// the mixer's source collections
    pub fn new(mixer: M, labeler: AggregatingLabeler) -> Self {
        Self { mixer, labeler }
    }

    /// Assemble one supervised batch of `num_samples` items.
    ///
    /// `existing_mask` reuses a caller-owned buffer, which is mutated in
    /// place and handed back inside the result; its shape must match the
    /// batch exactly. Callers should allocate fresh buffers (`None`)
    /// across independent batches unless they intentionally share the
    /// allocation.
    pub fn get_batch(
        &mut self,
        num_samples: usize,
        selector: &Selector,
        existing_mask: Option<Array3<f32>>,
    ) -> TrainResult<SupervisedBatch<M::Elem>> {
        let mut batch = self.mixer.next_batch(num_samples)?;
        if batch.is_empty() {
            return Err(TrainError::EmptyBatch);
        }

        let mixed = batch.remove(0);
        let sources = batch;
        if sources.is_empty() {
            return Err(TrainError::EmptyBatch);
        }

        let views: Vec<_> = sources.iter().map(|e| e.spectra.view()).collect();
        let mask = DominanceMaskBuilder::new(selector.clone()).build(&views, existing_mask)?;

        let batch_size = sources[0].batch_size();
        let mut labels = Array2::<usize>::zeros((sources.len(), batch_size));
        for (s_idx, entry) in sources.iter().enumerate() {
            let indices = self.labeler.resolve_all(&entry.ids)?;
            if indices.len() != batch_size {
                return Err(TrainError::ShapeMismatch {
                    expected: format!("{batch_size} identifiers"),
                    got: format!("{} identifiers", indices.len()),
                });
            }
            for (b, &idx) in indices.iter().enumerate() {
                labels[[s_idx, b]] = idx;
            }
        }

        debug!(
            "assembled batch: {} items, {} sources, mask {:?}",
            batch_size,
            sources.len(),
            mask.dim()
        );

        Ok(SupervisedBatch {
            mixed: mixed.spectra,
            mask,
            labels,
        })
    }

    /// Resolve a single identifier against the global registry
    pub fn resolve(&self, identifier: &str) -> TrainResult<usize> {
        self.labeler.resolve(identifier)
    }

    /// Resolve an ordered sequence of identifiers against the global
    /// registry
    pub fn resolve_all<I, T>(&self, identifiers: I) -> TrainResult<Vec<usize>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.labeler.resolve_all(identifiers)
    }

    /// Random embedding sized (hidden_units × num_labels), defaulting
    /// `num_labels` to the global registry size
    pub fn initialize_embedding(
        &self,
        init: &mut EmbeddingInitializer,
        hidden_units: usize,
        num_labels: Option<usize>,
    ) -> Array2<f32> {
        self.labeler
            .initialize_embedding(init, hidden_units, num_labels)
    }

    /// The global labeler
    pub fn labeler(&self) -> &AggregatingLabeler {
        &self.labeler
    }

    /// Access the wrapped mixer
    pub fn mixer(&self) -> &M {
        &self.mixer
    }
}
