//! Scene messages and their visibility model
//!
//! Every prompt the orchestrator injects and every output a player produces
//! is recorded as a [`Message`]. Messages are immutable once appended, with
//! one exception: the last message of a completed turn may be rewritten in
//! place exactly once, when it is compressed into a day summary (see
//! [`MessagePool::compress_last_turn`](pool::MessagePool::compress_last_turn)).

pub mod pool;

use crate::core::name::AgentName;
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Author {
    /// The orchestrator itself (prompt injections)
    System,
    /// A roster player (parsed outputs)
    Agent(AgentName),
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Author::System => write!(f, "System"),
            Author::Agent(name) => write!(f, "{}", name),
        }
    }
}

/// Which agents may observe a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Visibility {
    /// Visible to every agent in the scene
    All,
    /// Visible to a single agent only
    Only(AgentName),
}

/// A single exchange in the scene transcript (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub content: String,
    pub visibility: Visibility,
    /// Turn index the message belongs to (visibility-scoping unit)
    pub turn: u64,
    /// Set once the message has been rewritten into a rollover summary
    pub compressed: bool,
}

impl Message {
    /// A system-authored prompt injection visible to one agent.
    pub fn system(content: impl Into<String>, visible_to: AgentName, turn: u64) -> Self {
        Self {
            author: Author::System,
            content: content.into(),
            visibility: Visibility::Only(visible_to),
            turn,
            compressed: false,
        }
    }

    /// A system-authored broadcast visible to the whole roster.
    pub fn broadcast(content: impl Into<String>, turn: u64) -> Self {
        Self {
            author: Author::System,
            content: content.into(),
            visibility: Visibility::All,
            turn,
            compressed: false,
        }
    }

    /// A player-authored output, visible to its author.
    pub fn from_agent(author: AgentName, content: impl Into<String>, turn: u64) -> Self {
        Self {
            visibility: Visibility::Only(author.clone()),
            author: Author::Agent(author),
            content: content.into(),
            turn,
            compressed: false,
        }
    }

    /// Whether `agent` is allowed to observe this message.
    pub fn visible_to(&self, agent: &AgentName) -> bool {
        match &self.visibility {
            Visibility::All => true,
            Visibility::Only(name) => name == agent,
        }
    }
}
