//! Direction policy and index ordering.
//!
//! The comparator here is written once against the [`PredictorLike`]
//! capability (indexed numeric access) rather than per concrete container,
//! so the plain and resampled predictors share a single ordering
//! implementation. The backing sort is std's stable `sort_by`: tied values
//! keep their original relative index order, which downstream curve-point
//! computation relies on.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::RocError;

/// Ordering policy for predictor values.
///
/// The variant names follow the host-facing `">"`/`"<"` tokens, whose
/// semantics are inverted relative to the sort they produce: `Greater`
/// (the `">"` token, and the default) sorts *ascending* by value, `Less`
/// (`"<"`) sorts descending. The quirk is load-bearing for downstream
/// threshold code and is preserved, not fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// The `">"` policy: ascending numeric order.
    #[default]
    Greater,
    /// The `"<"` policy: descending numeric order.
    Less,
}

impl FromStr for Direction {
    type Err = RocError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            ">" => Ok(Direction::Greater),
            "<" => Ok(Direction::Less),
            other => Err(RocError::InvalidDirection(other.to_string())),
        }
    }
}

/// Indexed numeric access over a logical controls-then-cases sequence.
///
/// Both [`crate::Predictor`] and [`crate::ResampledPredictor`] implement
/// this; the comparator and order computation only ever read through it and
/// hold no independent notion of group membership.
pub trait PredictorLike {
    /// Number of logical indices, `n_controls + n_cases`.
    fn n_total(&self) -> usize;

    /// Value at logical index `idx`. Precondition: `idx < n_total()`;
    /// out-of-range access is not checked here.
    fn value(&self, idx: usize) -> f64;
}

/// Compares two logical indices by their predictor values under `direction`.
///
/// `total_cmp` matches the plain `<` comparison for finite values and gives
/// NaN a deterministic position; ties report `Equal`, never `Less`.
fn compare_values<P: PredictorLike + ?Sized>(
    predictor: &P,
    i: usize,
    j: usize,
    direction: Direction,
) -> Ordering {
    match direction {
        Direction::Greater => predictor.value(i).total_cmp(&predictor.value(j)),
        Direction::Less => predictor.value(j).total_cmp(&predictor.value(i)),
    }
}

/// Builds the identity index sequence `[0, n_total)` and stable-sorts it by
/// predictor value under `direction`.
///
/// O(n log n) comparisons, O(n) auxiliary space for the index vector. The
/// generated indices are always in range, so access goes through the
/// unchecked [`PredictorLike::value`].
pub fn sorted_order<P: PredictorLike + ?Sized>(predictor: &P, direction: Direction) -> Vec<usize> {
    let mut index: Vec<usize> = (0..predictor.n_total()).collect();
    index.sort_by(|&i, &j| compare_values(predictor, i, j, direction));
    index
}
