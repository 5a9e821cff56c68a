//! Domain error types
//!
//! These all signal invariant violations in pointer or pool management.
//! They are programming defects, never retried, and always fatal to a run.

use thiserror::Error;

/// Errors raised by [`MessagePool`](crate::MessagePool) accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("message pool is empty")]
    Empty,
}

/// Errors raised by roster lookups.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    #[error("player roster is empty")]
    Empty,

    #[error("player index {index} out of bounds for roster of {len}")]
    OutOfBounds { index: usize, len: usize },
}
