//! Element selection for dominance comparison

use serde::{Deserialize, Serialize};

use crate::error::{TrainError, TrainResult};

/// Which time-frequency elements of a spectral array participate in the
/// dominance comparison.
///
/// A selector names time bins; every selected bin contributes all of its
/// frequency bins, flattened in bin order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// Only the final time bin
    LastIndex,
    /// An explicit ordered list of time bins
    TimeBins(Vec<usize>),
    /// The full time extent
    All,
}

impl Default for Selector {
    fn default() -> Self {
        Selector::LastIndex
    }
}

impl Selector {
    /// Resolve into a concrete list of time-bin indices for a spectrum
    /// with `time_bins` bins.
    ///
    /// Fails with [`TrainError::SelectorOutOfRange`] if any referenced bin
    /// lies outside the spectrum.
    pub fn resolve(&self, time_bins: usize) -> TrainResult<Vec<usize>> {
        match self {
            Selector::LastIndex => {
                if time_bins == 0 {
                    return Err(TrainError::SelectorOutOfRange {
                        index: 0,
                        time_bins,
                    });
                }
                Ok(vec![time_bins - 1])
            }
            Selector::TimeBins(bins) => {
                for &bin in bins {
                    if bin >= time_bins {
                        return Err(TrainError::SelectorOutOfRange {
                            index: bin,
                            time_bins,
                        });
                    }
                }
                Ok(bins.clone())
            }
            Selector::All => Ok((0..time_bins).collect()),
        }
    }

    /// Number of selected elements for a (time × frequency) extent
    pub fn element_count(&self, time_bins: usize, freq_bins: usize) -> TrainResult<usize> {
        Ok(self.resolve(time_bins)?.len() * freq_bins)
    }
}
