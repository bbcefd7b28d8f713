//! Dominance mask computation
//!
//! For each source in a batch, marks the time-frequency positions where
//! that source's magnitude is weakly maximal across all sources.

use log::trace;
use ndarray::{Array2, Array3, ArrayView3, s};

use st_core::{Magnitude, Selector, TrainError, TrainResult};

/// Computes dominance masks over per-source spectral batches.
///
/// The mask is shaped (batch × sources × selected elements) with values
/// in {0, 1}. Position (b, s, e) holds 1 iff source s's magnitude is
/// greater than or equal to every other source's magnitude at that
/// position; exact ties mark all tied sources. At least one source is
/// always marked per position.
#[derive(Debug, Clone, Default)]
pub struct DominanceMaskBuilder {
    selector: Selector,
}

impl DominanceMaskBuilder {
    /// Create a builder with the given element selector
    pub fn new(selector: Selector) -> Self {
        Self { selector }
    }

    /// The configured selector
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Build the dominance mask for one batch of per-source spectra
    /// (mixed/reference entry excluded), each shaped
    /// (batch × time × frequency).
    ///
    /// `existing` reuses a previously allocated buffer, mutating it in
    /// place; it must match (batch × sources × selected elements)
    /// exactly or the call fails with a shape mismatch. Pass `None` for
    /// a fresh zeroed buffer — the default for independent batches.
    /// Every mask slice is overwritten, so reuse across batches is only
    /// meaningful to callers who intentionally share the allocation.
    pub fn build<T: Magnitude>(
        &self,
        sources: &[ArrayView3<'_, T>],
        existing: Option<Array3<f32>>,
    ) -> TrainResult<Array3<f32>> {
        let first = sources.first().ok_or(TrainError::EmptyBatch)?;
        let (batch, time, freq) = first.dim();

        for src in &sources[1..] {
            if src.dim() != first.dim() {
                return Err(TrainError::ShapeMismatch {
                    expected: format!("{:?}", first.dim()),
                    got: format!("{:?}", src.dim()),
                });
            }
        }

        let bins = self.selector.resolve(time)?;
        let count = bins.len() * freq;
        let num_sources = sources.len();

        let mut mask = match existing {
            Some(buf) => {
                if buf.dim() != (batch, num_sources, count) {
                    return Err(TrainError::ShapeMismatch {
                        expected: format!("{:?}", (batch, num_sources, count)),
                        got: format!("{:?}", buf.dim()),
                    });
                }
                buf
            }
            None => Array3::zeros((batch, num_sources, count)),
        };

        let mags: Vec<Array2<f32>> = sources
            .iter()
            .map(|src| selected_magnitudes(src, &bins, freq))
            .collect();

        for s_idx in 0..num_sources {
            let mut slice = mask.slice_mut(s![.., s_idx, ..]);
            slice.fill(1.0);

            // A single losing comparison zeroes the position permanently.
            for other in 0..num_sources {
                if other == s_idx {
                    continue;
                }
                ndarray::Zip::from(&mut slice)
                    .and(&mags[s_idx])
                    .and(&mags[other])
                    .for_each(|y, &a, &b| {
                        if a < b {
                            *y = 0.0;
                        }
                    });
            }
            trace!("dominance slice computed for source {s_idx}");
        }

        Ok(mask)
    }
}

/// Gather the selected elements' magnitudes into (batch × count),
/// flattened as (bin, frequency) in selector order.
fn selected_magnitudes<T: Magnitude>(
    spectra: &ArrayView3<'_, T>,
    bins: &[usize],
    freq: usize,
) -> Array2<f32> {
    let batch = spectra.dim().0;
    let mut out = Array2::zeros((batch, bins.len() * freq));

    for b in 0..batch {
        for (k, &t) in bins.iter().enumerate() {
            for f in 0..freq {
                out[[b, k * freq + f]] = spectra[[b, t, f]].magnitude();
            }
        }
    }

    out
}
