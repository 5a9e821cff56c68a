//! Player port
//!
//! A player turns an observation text into an action text. The call is
//! blocking, potentially slow, and may fail transiently (typically a network
//! round-trip to a model backend); the engine treats any failure opaquely
//! and wraps the invocation in its bounded retry loop.

use agora_domain::AgentName;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a player invocation.
///
/// All variants are transient from the engine's point of view.
#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("invocation failed: {0}")]
    Invocation(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// An autonomous agent participating in a scene.
#[async_trait]
pub trait Player: Send + Sync {
    /// Roster display name of this player.
    fn name(&self) -> &AgentName;

    /// Produce an action for the given observation.
    async fn act(&self, observation: &str) -> Result<String, PlayerError>;
}
