//! Configuration file schema
//!
//! Serde-default structs merged by the figment loader. Every section can be
//! partially specified; unset fields fall back to the built-in defaults.

use agora_application::EngineParams;
use agora_domain::{Stage, day_cycle_pipeline};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub simulation: SimulationConfig,
    pub llm: LlmConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub engine: EngineParams,
    /// One scene (and one store address) is created per player.
    pub players: Vec<PlayerConfig>,
    /// Optional pipeline override; defaults to the canonical day cycle.
    pub stages: Option<Vec<Stage>>,
}

impl FileConfig {
    /// The stage pipeline to run, config override or canonical default.
    pub fn pipeline(&self) -> Vec<Stage> {
        self.stages.clone().unwrap_or_else(day_cycle_pipeline)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Experiment name; becomes the log directory under `logging.dir`.
    pub exp_name: String,
    /// Days (scene cycles) to run.
    pub days: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            exp_name: "exp".to_string(),
            days: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible endpoint.
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Default model for players without an override.
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Host running the per-venue store services.
    pub host: String,
    /// Store address of the first venue; later venues count up from here.
    pub base_address: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            base_address: 9000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Root directory for transcripts and metric tables.
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
        }
    }
}

/// One roster player and its venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Roster display name.
    pub name: String,
    /// Persona system prompt sent with every invocation.
    #[serde(default = "default_persona")]
    pub persona: String,
    /// Per-player model override.
    #[serde(default)]
    pub model: Option<String>,
}

fn default_persona() -> String {
    "You are the owner of a restaurant competing in a shared market. \
     Respond to each instruction concisely and, when asked for structured \
     data, answer with valid JSON only."
        .to_string()
}
