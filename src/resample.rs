//! Bootstrap resampling over a [`Predictor`].
//!
//! A [`ResampledPredictor`] is a view with the same two group sizes as its
//! source but with membership drawn by resampling with replacement. Three
//! construction paths exist: explicit caller-supplied indices, stratified
//! drawing (within each group independently), and non-stratified drawing
//! (from the pooled sequence, re-split into the original group sizes).
//! Every path produces a fully-formed, immutable value; there is no
//! populate-after-construction phase.
//!
//! Both index sequences are stored as *logical* indices into the source
//! predictor's pooled controls-then-cases numbering. Stratified and direct
//! construction only ever place control indices in control slots and case
//! indices in case slots; the non-stratified strategy may fill either kind
//! of slot with either kind of index.

use rand::Rng;

use crate::error::RocError;
use crate::order::{Direction, PredictorLike, sorted_order};
use crate::predictor::Predictor;

/// Draws `count` uniform indices with replacement from `[0, domain)`.
///
/// Zero draws succeed for any domain, including an empty one, so
/// zero-length groups resample to empty index sequences. One or more draws
/// from an empty domain fail with [`RocError::EmptyDomain`] rather than
/// returning an arbitrary index.
pub fn draw_indices<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    domain: usize,
) -> Result<Vec<usize>, RocError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if domain == 0 {
        return Err(RocError::EmptyDomain { count });
    }
    Ok((0..count).map(|_| rng.gen_range(0..domain)).collect())
}

/// Gathers source values at the given logical indices.
fn resampled_values(source: &Predictor, indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&idx| source.get(idx)).collect()
}

/// A resampled view over a borrowed [`Predictor`].
///
/// Holds the source by reference and never copies or mutates its data; the
/// only owned state is the two index sequences and the materialized
/// resampled groups. Group sizes always equal the source's: resampling
/// changes composition, never cardinality.
#[derive(Debug, Clone)]
pub struct ResampledPredictor<'a> {
    source: &'a Predictor,
    controls_idx: Vec<usize>,
    cases_idx: Vec<usize>,
    resampled_controls: Vec<f64>,
    resampled_cases: Vec<f64>,
}

impl<'a> ResampledPredictor<'a> {
    /// Invariant: `controls_idx` and `cases_idx` hold in-range logical
    /// indices with the source's group lengths.
    fn from_logical(source: &'a Predictor, controls_idx: Vec<usize>, cases_idx: Vec<usize>) -> Self {
        let resampled_controls = resampled_values(source, &controls_idx);
        let resampled_cases = resampled_values(source, &cases_idx);
        Self {
            source,
            controls_idx,
            cases_idx,
            resampled_controls,
            resampled_cases,
        }
    }

    /// Builds a resampled view from caller-supplied group-relative indices.
    ///
    /// `controls_idx` must have length `n_controls` with every value in
    /// `[0, n_controls)`; `cases_idx` length `n_cases` with every value in
    /// `[0, n_cases)`. Violations are reported at construction with
    /// [`RocError::IndexCountMismatch`] or [`RocError::IndexOutOfRange`].
    pub fn from_indices(
        source: &'a Predictor,
        controls_idx: Vec<usize>,
        cases_idx: Vec<usize>,
    ) -> Result<Self, RocError> {
        let (m, n) = (source.n_controls(), source.n_cases());
        if controls_idx.len() != m {
            return Err(RocError::IndexCountMismatch {
                group: "controls",
                expected: m,
                actual: controls_idx.len(),
            });
        }
        if cases_idx.len() != n {
            return Err(RocError::IndexCountMismatch {
                group: "cases",
                expected: n,
                actual: cases_idx.len(),
            });
        }
        for &idx in &controls_idx {
            if idx >= m {
                return Err(RocError::IndexOutOfRange { index: idx, len: m });
            }
        }
        for &idx in &cases_idx {
            if idx >= n {
                return Err(RocError::IndexOutOfRange { index: idx, len: n });
            }
        }
        // Case sub-indices translate into the pooled numbering.
        let cases_idx = cases_idx.into_iter().map(|idx| idx + m).collect();
        Ok(Self::from_logical(source, controls_idx, cases_idx))
    }

    /// Resamples each group independently: `n_controls` draws with
    /// replacement from the controls, `n_cases` draws from the cases.
    ///
    /// Class imbalance is preserved exactly in every draw, which is the
    /// appropriate policy for stratified bootstrap confidence intervals.
    pub fn stratified<R: Rng + ?Sized>(
        source: &'a Predictor,
        rng: &mut R,
    ) -> Result<Self, RocError> {
        let (m, n) = (source.n_controls(), source.n_cases());
        let controls_idx = draw_indices(rng, m, m)?;
        let cases_idx = draw_indices(rng, n, n)?
            .into_iter()
            .map(|idx| idx + m)
            .collect();
        log::debug!("stratified resample: {} controls, {} cases", m, n);
        Ok(Self::from_logical(source, controls_idx, cases_idx))
    }

    /// Resamples from the pooled sequence: `n_total` draws with replacement
    /// from `[0, n_total)`, the first `n_controls` of which fill the
    /// control slots and the rest the case slots, in draw order.
    ///
    /// Slot fills may cross groups, so the resampled "controls" can contain
    /// case values and vice versa; only the group *sizes* are fixed to the
    /// original proportions. This is the unconditional bootstrap policy.
    pub fn non_stratified<R: Rng + ?Sized>(
        source: &'a Predictor,
        rng: &mut R,
    ) -> Result<Self, RocError> {
        let m = source.n_controls();
        let total = source.n_total();
        let mut pooled = draw_indices(rng, total, total)?;
        let cases_idx = pooled.split_off(m);
        log::debug!(
            "non-stratified resample: {} pooled draws split {} / {}",
            total,
            m,
            cases_idx.len()
        );
        Ok(Self::from_logical(source, pooled, cases_idx))
    }

    /// The borrowed source predictor.
    pub fn source(&self) -> &Predictor {
        self.source
    }

    /// Number of resampled control slots; always the source's `n_controls`.
    pub fn n_controls(&self) -> usize {
        self.controls_idx.len()
    }

    /// Number of resampled case slots; always the source's `n_cases`.
    pub fn n_cases(&self) -> usize {
        self.cases_idx.len()
    }

    /// Total logical length; always the source's `n_total`.
    pub fn n_total(&self) -> usize {
        self.controls_idx.len() + self.cases_idx.len()
    }

    /// Unchecked value at resampled logical index `idx`, resolved through
    /// the resampling indices first and the source second.
    ///
    /// Precondition: `idx < n_total()`, unchecked as in
    /// [`Predictor::get`].
    pub fn get(&self, idx: usize) -> f64 {
        if idx < self.controls_idx.len() {
            self.source.get(self.controls_idx[idx])
        } else {
            self.source.get(self.cases_idx[idx - self.controls_idx.len()])
        }
    }

    /// Checked variant of [`ResampledPredictor::get`].
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

    /// Whether a resampled value exists at logical index `idx`.
    pub fn is_valid(&self, idx: usize) -> bool {
        idx < self.n_total()
    }

    /// `true` iff logical index `idx` addresses a control slot.
    pub fn is_control(&self, idx: usize) -> bool {
        idx < self.controls_idx.len()
    }

    /// `true` iff logical index `idx` addresses a case slot.
    pub fn is_case(&self, idx: usize) -> bool {
        idx >= self.controls_idx.len()
    }

    /// Stable sort order of the resampled logical indices under
    /// `direction`; same contract as [`Predictor::get_order`].
    pub fn get_order(&self, direction: Direction) -> Vec<usize> {
        sorted_order(self, direction)
    }

    /// The materialized resampled control values. Repeated reads return
    /// identical data; nothing is redrawn.
    pub fn controls(&self) -> &[f64] {
        &self.resampled_controls
    }

    /// The materialized resampled case values.
    pub fn cases(&self) -> &[f64] {
        &self.resampled_cases
    }

    /// The control-slot fills as logical indices into the source.
    pub fn controls_idx(&self) -> &[usize] {
        &self.controls_idx
    }

    /// The case-slot fills as logical indices into the source.
    pub fn cases_idx(&self) -> &[usize] {
        &self.cases_idx
    }
}

impl PredictorLike for ResampledPredictor<'_> {
    fn n_total(&self) -> usize {
        ResampledPredictor::n_total(self)
    }

    fn value(&self, idx: usize) -> f64 {
        self.get(idx)
    }
}
