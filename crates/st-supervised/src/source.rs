//! Labeled per-source data streams

use log::debug;
use ndarray::Array2;

use st_core::{TrainResult, source_label};

use crate::embedding::EmbeddingInitializer;
use crate::labels::LabelRegistry;

/// Iteration collaborator for one source collection.
///
/// Implementations own the actual dataset access (chunking, windowing,
/// spectral transforms); this crate only needs the identifiers in the
/// stream's group namespace to seed its label set.
pub trait SpectralStream {
    /// All item identifiers in the stream's group namespace,
    /// formatted `<label>/<rest>`.
    fn group_ids(&self) -> Vec<String>;
}

/// One source-specific data stream with a local label registry.
///
/// Construction scans the stream's group identifiers once, extracts each
/// label (segment before the first `/`), deduplicates, and builds the
/// registry. The registry is not extended afterwards.
#[derive(Debug)]
pub struct LabeledSource<S> {
    stream: S,
    registry: LabelRegistry,
}

impl<S: SpectralStream> LabeledSource<S> {
    /// Wrap a stream, deriving its label registry from the group namespace
    pub fn new(stream: S) -> Self {
        let registry =
            LabelRegistry::from_labels(stream.group_ids().iter().map(|id| source_label(id)));
        debug!(
            "labeled source: {} distinct labels from group namespace",
            registry.len()
        );

        Self { stream, registry }
    }

    /// The sorted list of distinct labels for this source
    pub fn labels(&self) -> &[String] {
        self.registry.labels()
    }

    /// The local label registry
    pub fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    /// Resolve a single identifier to its local label index
    pub fn resolve(&self, identifier: &str) -> TrainResult<usize> {
        self.registry.resolve(source_label(identifier))
    }

    /// Resolve an ordered sequence of identifiers to local label indices
    pub fn resolve_all<I, T>(&self, identifiers: I) -> TrainResult<Vec<usize>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        identifiers
            .into_iter()
            .map(|id| self.resolve(id.as_ref()))
            .collect()
    }

    /// Random embedding sized (hidden_units × num_labels), defaulting
    /// `num_labels` to this source's registry size
    pub fn initialize_embedding(
        &self,
        init: &mut EmbeddingInitializer,
        hidden_units: usize,
        num_labels: Option<usize>,
    ) -> Array2<f32> {
        init.initialize(hidden_units, num_labels.unwrap_or(self.registry.len()))
    }

    /// Access the wrapped stream
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Unwrap the stream
    pub fn into_stream(self) -> S {
        self.stream
    }
}
