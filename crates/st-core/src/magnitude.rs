//! Magnitude abstraction over real and complex spectra

use num_complex::{Complex32, Complex64};

/// Element types whose absolute value can enter a dominance comparison.
///
/// Spectral batches may carry raw magnitudes (`f32`, `f64`) or complex
/// STFT bins (`Complex32`, `Complex64`); both compare through the same
/// absolute-value rule.
pub trait Magnitude: Copy {
    /// Absolute value of the element
    fn magnitude(self) -> f32;
}

impl Magnitude for f32 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Magnitude for f64 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.abs() as f32
    }
}

impl Magnitude for Complex32 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.norm()
    }
}

impl Magnitude for Complex64 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.norm() as f32
    }
}
