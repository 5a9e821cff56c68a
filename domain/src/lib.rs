//! Domain layer for agora
//!
//! This crate contains the core business logic, entities, and value objects
//! of the scene orchestrator. It has no dependencies on infrastructure or
//! presentation concerns, performs no I/O, and is fully synchronous.
//!
//! # Core Concepts
//!
//! ## Scene
//!
//! A scene is one bounded turn/process orchestration run over a fixed player
//! roster. Its pointer state machine ([`ScenePointers`]) tracks the current
//! turn, player, and pipeline stage; the scene is terminal exactly when the
//! stage pointer has walked off the end of its pipeline.
//!
//! ## Messages and visibility
//!
//! Every prompt injection and every player output becomes a [`Message`] in
//! the scene's [`MessagePool`]. Messages are turn-indexed and carry a
//! visibility target; an agent's observation is the insertion-ordered slice
//! of messages it is allowed to see.

pub mod core;
pub mod daybook;
pub mod message;
pub mod registry;
pub mod scene;
pub mod util;

// Re-export commonly used types
pub use self::core::{
    error::{PoolError, RosterError},
    name::AgentName,
};
pub use daybook::{PlanningWindow, planning_window};
pub use message::{Author, Message, Visibility, pool::MessagePool};
pub use registry::{StoreAddress, VenueDirectory};
pub use scene::{
    stage::{Stage, StageName, day_cycle_pipeline},
    state::ScenePointers,
};
pub use util::truncate_str;
