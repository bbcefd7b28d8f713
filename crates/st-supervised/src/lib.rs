//! # StemTrain Supervised Batch Assembly
//!
//! Prepares supervised training batches for multi-source audio
//! separation models:
//! - Dominance masks (which source is loudest per time-frequency bin)
//! - Globally consistent label→index registries across source collections
//! - Label-index matrices aligned with each batch
//! - Random embedding initialization
//!
//! ## Architecture
//!
//! Raw audio loading, chunking, and signal mixing live behind the
//! [`SpectralStream`] and [`BatchMixer`] traits; this crate only consumes
//! their outputs. [`SupervisedBatchAssembler`] orchestrates one batch
//! request: mixer → [`DominanceMaskBuilder`] → [`AggregatingLabeler`].

mod assembler;
mod embedding;
mod labeler;
mod labels;
mod mask;
mod source;

pub use assembler::{BatchMixer, SupervisedBatch, SupervisedBatchAssembler};
pub use embedding::EmbeddingInitializer;
pub use labeler::AggregatingLabeler;
pub use labels::LabelRegistry;
pub use mask::DominanceMaskBuilder;
pub use source::{LabeledSource, SpectralStream};

pub use st_core::{BatchEntry, Magnitude, RawBatch, Selector, TrainError, TrainResult, source_label};
