//! Global label aggregation across source collections

use log::debug;
use ndarray::Array2;

use st_core::{TrainResult, source_label};

use crate::embedding::EmbeddingInitializer;
use crate::labels::LabelRegistry;
use crate::source::{LabeledSource, SpectralStream};

/// Shared label registry over several labeled sources.
///
/// The registry is the sorted union of all source label sets, so a label
/// appearing in more than one collection (the same speaker in two source
/// collections, say) maps to one global index. A downstream embedding
/// table stays label-consistent regardless of which collection a sample
/// came from.
///
/// Built once from the sources present at construction; adding sources
/// later does not extend it.
#[derive(Debug, Clone, Default)]
pub struct AggregatingLabeler {
    registry: LabelRegistry,
}

impl AggregatingLabeler {
    /// Aggregate the label sets of several labeled sources
    pub fn from_sources<'a, S, I>(sources: I) -> Self
    where
        S: SpectralStream + 'a,
        I: IntoIterator<Item = &'a LabeledSource<S>>,
    {
        Self::from_label_sets(sources.into_iter().map(|s| s.labels()))
    }

    /// Aggregate from raw label sets
    pub fn from_label_sets<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let registry =
            LabelRegistry::from_labels(sets.into_iter().flatten().map(String::as_str));
        debug!("aggregated label registry: {} global labels", registry.len());

        Self { registry }
    }

    /// The shared global registry
    pub fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    /// The sorted global label set
    pub fn labels(&self) -> &[String] {
        self.registry.labels()
    }

    /// Number of global labels
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if no labels are registered
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Resolve a single identifier to its global label index
    pub fn resolve(&self, identifier: &str) -> TrainResult<usize> {
        self.registry.resolve(source_label(identifier))
    }

    /// Resolve an ordered sequence of identifiers to global label indices
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
    /// `num_labels` to the global registry size
    pub fn initialize_embedding(
        &self,
        init: &mut EmbeddingInitializer,
        hidden_units: usize,
        num_labels: Option<usize>,
    ) -> Array2<f32> {
        init.initialize(hidden_units, num_labels.unwrap_or(self.registry.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlapping_sets_collapse_to_union() {
        let a = labels(&["spk1", "spk2", "spk3"]);
        let b = labels(&["spk2", "spk3", "spk4"]);
        let labeler = AggregatingLabeler::from_label_sets([a.as_slice(), b.as_slice()]);

        assert_eq!(labeler.len(), 4);
        assert_eq!(labeler.labels(), ["spk1", "spk2", "spk3", "spk4"]);
    }

    #[test]
    fn test_shared_label_maps_to_one_index() {
        let a = labels(&["spk1", "spk2"]);
        let b = labels(&["spk2"]);
        let labeler = AggregatingLabeler::from_label_sets([a.as_slice(), b.as_slice()]);

        // Both collections' "spk2" resolve identically.
        assert_eq!(labeler.resolve("spk2/from-a.flac").unwrap(), 1);
        assert_eq!(labeler.resolve("spk2/from-b.flac").unwrap(), 1);
    }

    #[test]
    fn test_global_indices_match_single_source_ordering() {
        let a = labels(&["spk1", "spk2"]);
        let single = AggregatingLabeler::from_label_sets([a.as_slice()]);
        let merged = AggregatingLabeler::from_label_sets([a.as_slice(), a.as_slice()]);

        assert_eq!(
            single.resolve("spk1/x").unwrap(),
            merged.resolve("spk1/x").unwrap()
        );
        assert_eq!(single.len(), merged.len());
    }

    #[test]
    fn test_embedding_defaults_to_global_size() {
        let a = labels(&["spk1", "spk2", "spk3", "spk4", "spk5"]);
        let labeler = AggregatingLabeler::from_label_sets([a.as_slice()]);
        let mut init = EmbeddingInitializer::with_seed(11);

        let m = labeler.initialize_embedding(&mut init, 64, None);
        assert_eq!(m.dim(), (64, 5));
    }
}
