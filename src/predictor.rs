//! The concatenated controls-then-cases view over two numeric samples.

use crate::error::RocError;
use crate::order::{Direction, PredictorLike, sorted_order};

/// Two immutable numeric samples exposed as one logical sequence.
///
/// Logical index `i` in `[0, n_total)` maps to `controls[i]` when
/// `i < n_controls`, else to `cases[i - n_controls]`: controls always
/// precede cases. Constructed once from caller-supplied sequences and
/// read-only for its lifetime.
#[derive(Debug, Clone)]
pub struct Predictor {
    controls: Vec<f64>,
    cases: Vec<f64>,
}

impl Predictor {
    /// Builds a predictor from the control and case samples. Either group
    /// may be empty.
    pub fn new(controls: Vec<f64>, cases: Vec<f64>) -> Self {
        Self { controls, cases }
    }

    /// Number of control observations.
    pub fn n_controls(&self) -> usize {
        self.controls.len()
    }

    /// Number of case observations.
    pub fn n_cases(&self) -> usize {
        self.cases.len()
    }

    /// Total logical length, `n_controls + n_cases`.
    pub fn n_total(&self) -> usize {
        self.controls.len() + self.cases.len()
    }

    /// Unchecked value at logical index `idx`.
    ///
    /// Precondition: `idx < n_total()`. The ordering machinery only ever
    /// generates in-range indices, so this hot path performs no bounds
    /// check of its own; an out-of-range `idx` panics on the underlying
    /// slice access. Callers wanting a checked read use [`Predictor::at`].
    pub fn get(&self, idx: usize) -> f64 {
        if idx < self.controls.len() {
            self.controls[idx]
        } else {
            self.cases[idx - self.controls.len()]
        }
    }

    /// Checked value at logical index `idx`, failing with
    /// [`RocError::IndexOutOfRange`] instead of panicking.
    pub fn at(&self, idx: usize) -> Result<f64, RocError> {
        if self.is_valid(idx) {
            Ok(self.get(idx))
        } else {
            Err(RocError::IndexOutOfRange {
                index: idx,
                len: self.n_total(),
            })
        }
    }

    /// Whether a predictor value exists at logical index `idx`.
    ///
    /// Only the upper bound is meaningful: indices are unsigned, so the
    /// negative-index case the validating query historically ignored
    /// cannot arise here.
    pub fn is_valid(&self, idx: usize) -> bool {
        idx < self.n_total()
    }

    /// `true` iff logical index `idx` addresses a control. Total on any
    /// index, in or out of range.
    pub fn is_control(&self, idx: usize) -> bool {
        idx < self.controls.len()
    }

    /// `true` iff logical index `idx` addresses a case. Total on any index.
    pub fn is_case(&self, idx: usize) -> bool {
        idx >= self.controls.len()
    }

    /// Stable sort order of the logical indices under `direction`.
    ///
    /// Returns a permutation of `[0, n_total)`; with the default
    /// [`Direction::Greater`] the permutation walks values in ascending
    /// order.
    pub fn get_order(&self, direction: Direction) -> Vec<usize> {
        sorted_order(self, direction)
    }

    /// The backing control sample, unchanged.
    pub fn controls(&self) -> &[f64] {
        &self.controls
    }

    /// The backing case sample, unchanged.
    pub fn cases(&self) -> &[f64] {
        &self.cases
    }
}

impl PredictorLike for Predictor {
    fn n_total(&self) -> usize {
        Predictor::n_total(self)
    }

    fn value(&self, idx: usize) -> f64 {
        self.get(idx)
    }
}
