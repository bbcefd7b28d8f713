//! Label registry: deterministic label→index mapping

use std::collections::{BTreeSet, HashMap};

use st_core::{TrainError, TrainResult};

/// Ordered, deduplicated mapping from label to a dense zero-based index.
///
/// Indices follow the ascending lexicographic sort of the label set, so
/// the mapping is a pure function of the set's contents, not of arrival
/// order — the same labels always resolve to the same indices across
/// runs and across single- vs. multi-source configurations.
///
/// Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelRegistry {
    /// Build a registry from a collection of labels.
    ///
    /// Duplicates collapse; input order is irrelevant.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        let labels: Vec<String> = sorted.into_iter().collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();

        Self { labels, index }
    }

    /// Look up a label's index.
    ///
    /// Fails with [`TrainError::UnknownLabel`] for labels absent at
    /// construction time.
    pub fn resolve(&self, label: &str) -> TrainResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| TrainError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// The sorted label set
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
