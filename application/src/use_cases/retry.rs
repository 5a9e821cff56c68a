//! Bounded retry combinator
//!
//! Every step's "invoke player, parse output" unit runs through
//! [`with_retry`]. Fault kinds are explicit tags, not incidental error
//! types: a [`StepFault::Transient`] is logged and the unit re-attempted
//! with an unchanged observation, a [`StepFault::Fatal`] propagates
//! immediately, and an exhausted budget aborts the whole run.

use super::run_scene::SceneError;
use std::future::Future;
use tracing::warn;

/// Outcome kind of one attempt at a retried unit.
#[derive(Debug)]
pub enum StepFault {
    /// Worth another attempt within the budget.
    Transient(String),
    /// Not retryable; propagates unmodified.
    Fatal(SceneError),
}

impl StepFault {
    pub fn transient(reason: impl std::fmt::Display) -> Self {
        StepFault::Transient(reason.to_string())
    }
}

/// Run `op` up to `budget` times, stopping at the first success.
///
/// Transient faults are swallowed and logged until the budget is spent;
/// fatal faults short-circuit. With a budget of `n` and an operation that
/// fails `k < n` times before succeeding, `op` is invoked exactly `k + 1`
/// times; an operation that always fails transiently is invoked exactly `n`
/// times before [`SceneError::RetryExhausted`] is returned.
pub async fn with_retry<T, F, Fut>(budget: usize, label: &str, mut op: F) -> Result<T, SceneError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StepFault>>,
{
    for attempt in 1..=budget {
        match op().await {
            Ok(value) => return Ok(value),
            Err(StepFault::Fatal(err)) => return Err(err),
            Err(StepFault::Transient(reason)) => {
                warn!("attempt {}/{} of '{}' failed: {}", attempt, budget, label, reason);
            }
        }
    }

    Err(SceneError::RetryExhausted {
        label: label.to_string(),
        attempts: budget,
    })
}
