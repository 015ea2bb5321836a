//! Error kinds for the hull computation.
//!
//! The core is pure computation: there are no I/O failure modes and no
//! retries. `InvalidInput` covers malformed input caught by validation;
//! `InternalInvariantViolation` covers logic errors (a tangent walk that
//! exceeds its step cap) surfaced to the caller instead of hanging.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HullError {
    /// Input rejected before the computation starts.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// An internal invariant failed mid-computation. Not recoverable.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(&'static str),
}
