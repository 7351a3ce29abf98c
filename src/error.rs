//! Error taxonomy for the ordering/resampling core.
//!
//! The taxonomy is narrow and precondition-based: every variant reports a
//! local contract violation, never a transient condition. Nothing here is
//! retryable.

use thiserror::Error;

/// Errors raised by checked access and by resampling construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RocError {
    /// A logical index fell outside the valid range of a predictor or of a
    /// resampling group. Raised only by the checked access/construction
    /// paths; the unchecked hot paths keep their permissive contract.
    #[error("logical index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A caller-supplied resampling index sequence has the wrong length for
    /// its group.
    #[error("{group} index sequence has length {actual}, expected {expected}")]
    IndexCountMismatch {
        group: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A random draw was requested from an empty domain. Resampling a
    /// zero-length group draws zero indices and succeeds; asking for one or
    /// more draws from nothing fails fast instead of fabricating an index.
    #[error("cannot draw {count} random indices from an empty domain")]
    EmptyDomain { count: usize },

    /// A direction token other than `">"` or `"<"` was supplied.
    #[error("invalid direction token {0:?}, expected \">\" or \"<\"")]
    InvalidDirection(String),
}
