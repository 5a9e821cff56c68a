//! Scene engine
//!
//! A scene is driven through the [`Scene`] capability interface:
//! [`Scene::step`] executes one (player, stage) unit, [`Scene::is_terminal`]
//! reports whether the pipeline is exhausted, and [`Scene::terminal_action`]
//! performs the rollover. [`Scene::run`] ties them together and is the only
//! public entry point a host needs.

mod day_cycle;
mod planning;

pub use day_cycle::{DayCycleScene, ScenePorts, read_directory, write_directory};

use crate::ports::prompt_catalog::PromptError;
use crate::ports::venue_store::StoreError;
use agora_domain::{PoolError, RosterError, VenueDirectory};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Identity registry shared by the scenes of one run invocation.
///
/// Explicitly owned by the host and passed into every component that needs
/// lookup or registration; never ambient process-wide state.
pub type SharedDirectory = Arc<RwLock<VenueDirectory>>;

/// Create an empty run-scoped directory.
pub fn shared_directory() -> SharedDirectory {
    Arc::new(RwLock::new(VenueDirectory::new()))
}

/// Errors that can abort a scene run.
///
/// Prompt and store failures during prompt composition are configuration
/// defects and fail immediately; transient faults inside the retried
/// invoke/parse unit only surface here once the retry budget is spent.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("prompt configuration error: {0}")]
    Prompt(#[from] PromptError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("retry budget exhausted after {attempts} attempts at '{label}'")]
    RetryExhausted { label: String, attempts: usize },

    #[error("step() called on a terminal scene")]
    Terminal,

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Capability interface of one bounded orchestration run.
#[async_trait]
pub trait Scene: Send {
    /// True once the stage pointer has exhausted the pipeline.
    fn is_terminal(&self) -> bool;

    /// Execute exactly one (player, stage) unit: inject the stage prompt,
    /// observe, invoke the player under the retry budget, parse/persist the
    /// output, and advance the pointers. Returns the structured data the
    /// stage decoded, if any, as carried input for the next step.
    async fn step(&mut self, carried: Option<Value>) -> Result<Option<Value>, SceneError>;

    /// Rollover hook invoked once the pipeline is exhausted.
    async fn terminal_action(&mut self) -> Result<(), SceneError>;

    /// Drive the scene to terminal, then roll over.
    ///
    /// Re-entrant only in the sense that a later call resumes from whatever
    /// state the pointers hold; there is no checkpoint/resume guarantee
    /// beyond that.
    async fn run(&mut self, carried: Option<Value>) -> Result<(), SceneError> {
        let mut carried = carried;
        while !self.is_terminal() {
            carried = self.step(carried).await?;
        }
        self.terminal_action().await
    }
}
