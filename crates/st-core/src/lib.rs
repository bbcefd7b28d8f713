//! st-core: Shared types for StemTrain
//!
//! This crate provides the foundational types used by the supervised
//! batch-preparation crates: the spectral batch data model, element
//! selectors, magnitude abstraction, and error types.

mod batch;
mod error;
mod magnitude;
mod selector;

pub use batch::*;
pub use error::*;
pub use magnitude::*;
pub use selector::*;
