//! Infrastructure layer for agora
//!
//! Adapters implementing the application-layer ports: an HTTP
//! chat-completion player, the HTTP per-venue store, the filesystem prompt
//! catalog, and the JSONL/CSV log sinks, plus the figment-based
//! configuration loader.

pub mod config;
pub mod llm;
pub mod logging;
pub mod prompts;
pub mod store;

// Re-export commonly used types
pub use config::{FileConfig, loader::ConfigLoader};
pub use llm::chat_player::ChatPlayer;
pub use logging::{csv_table::CsvMetricTable, jsonl_transcript::JsonlTranscript};
pub use prompts::catalog::{CatalogError, FsPromptCatalog};
pub use store::http_store::HttpVenueStore;
