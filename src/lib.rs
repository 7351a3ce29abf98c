//! # Index Ordering and Bootstrap Resampling for ROC Statistics
//!
//! This crate provides the ordering and resampling machinery underlying
//! ROC-curve analysis: two numeric samples (controls and cases) are exposed
//! as one logical concatenated sequence, sort orders over that sequence are
//! computed under a configurable direction policy, and bootstrap variants of
//! the sequence are drawn either stratified (within each group) or
//! non-stratified (from the pooled sequence, re-split into the original
//! group sizes).
//!
//! - Downstream consumers (AUC computation, confidence-interval aggregation,
//!   comparison tests) are external: they see only `f64` sequences and
//!   `usize` index sequences.
//! - All operations are pure and synchronous. The original controls/cases
//!   are never mutated; a single [`Predictor`] may be shared read-only by
//!   any number of resamplers.
//! - Randomness is caller-supplied: both strategies take `&mut impl Rng`,
//!   so a seeded generator makes every bootstrap draw reproducible.

#![deny(dead_code)]
#![deny(unused_imports)]

pub mod error;
pub mod order;
pub mod predictor;
pub mod resample;

pub use error::RocError;
pub use order::{Direction, PredictorLike};
pub use predictor::Predictor;
pub use resample::{ResampledPredictor, draw_indices};
