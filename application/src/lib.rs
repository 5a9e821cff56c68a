//! Application layer for agora
//!
//! This crate contains the scene engine, port definitions, and use cases.
//! It depends only on the domain layer; every external collaborator (player
//! invocation, prompt rendering, the per-venue store, transcript and table
//! sinks) is reached through a port trait whose adapters live in the
//! infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::EngineParams;
pub use ports::{
    metric_table::{MetricTable, NoMetricTable},
    player::{Player, PlayerError},
    prompt_catalog::{PromptCatalog, PromptError, PromptKey},
    transcript::{NoTranscript, TranscriptEvent, TranscriptLog},
    venue_store::{RecordKey, StoreError, VenueStore},
};
pub use use_cases::retry::{StepFault, with_retry};
pub use use_cases::run_scene::{
    DayCycleScene, Scene, SceneError, ScenePorts, SharedDirectory, read_directory,
    shared_directory, write_directory,
};
pub use use_cases::standings::{Standing, collect_standings};
