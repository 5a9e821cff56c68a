//! Day-cycle competitive scene
//!
//! The one concrete scene specialization: a fixed pipeline of stages is run
//! once per day for a single venue's player roster, the final output of the
//! day is compressed into a day summary at rollover, and the venue identity
//! resolved from freshly persisted basic info is registered in the run's
//! directory for downstream aggregation.

use super::planning;
use super::{Scene, SceneError, SharedDirectory};
use crate::config::EngineParams;
use crate::ports::metric_table::MetricTable;
use crate::ports::player::Player;
use crate::ports::prompt_catalog::{PromptCatalog, PromptKey};
use crate::ports::transcript::{TranscriptEvent, TranscriptLog};
use crate::ports::venue_store::{RecordKey, StoreError, VenueStore};
use crate::use_cases::retry::{StepFault, with_retry};
use agora_domain::{
    AgentName, Message, MessagePool, RosterError, ScenePointers, Stage, StageName, StoreAddress,
    VenueDirectory, truncate_str,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Bundle of collaborator handles a scene runs against.
#[derive(Clone)]
pub struct ScenePorts {
    pub store: Arc<dyn VenueStore>,
    pub prompts: Arc<dyn PromptCatalog>,
    pub transcript: Arc<dyn TranscriptLog>,
    pub metrics: Arc<dyn MetricTable>,
}

/// A multi-day competitive scene for one venue.
pub struct DayCycleScene {
    home: StoreAddress,
    roster: Vec<Arc<dyn Player>>,
    pipeline: Vec<Stage>,
    pool: MessagePool,
    pointers: ScenePointers,
    day: u64,
    directory: SharedDirectory,
    ports: ScenePorts,
    params: EngineParams,
}

impl DayCycleScene {
    /// Build a scene over a fixed, non-empty roster and externally supplied
    /// stage pipeline. Registers every roster player under the venue's
    /// store address.
    pub fn new(
        home: StoreAddress,
        roster: Vec<Arc<dyn Player>>,
        pipeline: Vec<Stage>,
        directory: SharedDirectory,
        ports: ScenePorts,
        params: EngineParams,
    ) -> Result<Self, RosterError> {
        if roster.is_empty() {
            return Err(RosterError::Empty);
        }

        {
            let mut dir = write_directory(&directory);
            for player in &roster {
                dir.register(player.name().clone(), home);
            }
        }

        Ok(Self {
            home,
            roster,
            pipeline,
            pool: MessagePool::new(),
            pointers: ScenePointers::new(),
            day: 0,
            directory,
            ports,
            params,
        })
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn turn(&self) -> u64 {
        self.pointers.turn()
    }

    pub fn home(&self) -> StoreAddress {
        self.home
    }

    pub fn pool(&self) -> &MessagePool {
        &self.pool
    }

    fn current_player(&self) -> Result<Arc<dyn Player>, RosterError> {
        let idx = self.pointers.player_idx();
        self.roster
            .get(idx)
            .cloned()
            .ok_or(RosterError::OutOfBounds {
                index: idx,
                len: self.roster.len(),
            })
    }

    /// Append to the pool and mirror to the transcript log in one motion,
    /// keeping the log append-for-append with the in-memory sequence.
    fn append_message(&mut self, message: Message) {
        let stored = self.pool.append(message);
        self.ports.transcript.record(TranscriptEvent::appended(stored));
    }

    /// Inject the daybook context before planning on later days and feed
    /// the side-channel metric tables.
    async fn inject_planning_context(&mut self, player: &AgentName) -> Result<(), SceneError> {
        let ctx = planning::gather(
            self.ports.store.as_ref(),
            self.home,
            self.day,
            self.params.daybook_window,
        )
        .await?;

        let prompt = self.ports.prompts.render(PromptKey::Daybook, &ctx.prompt_data)?;
        let turn = self.pointers.turn();
        self.append_message(Message::system(prompt, player.clone(), turn));

        let column = format!("day{}", self.day);
        if let Some(rows) = &ctx.latest_daybook_rows {
            self.ports.metrics.append_column("data", &column, rows);
        }
        self.ports.metrics.append_column("menu", &column, &ctx.menu_rows);

        Ok(())
    }
}

#[async_trait]
impl Scene for DayCycleScene {
    fn is_terminal(&self) -> bool {
        self.pointers.is_terminal(self.pipeline.len())
    }

    async fn step(&mut self, carried: Option<Value>) -> Result<Option<Value>, SceneError> {
        let stage = *self
            .pointers
            .current_stage(&self.pipeline)
            .ok_or(SceneError::Terminal)?;
        let player = self.current_player()?;
        let player_name = player.name().clone();
        let turn = self.pointers.turn();

        info!(
            "day {} turn {} stage '{}' player '{}'",
            self.day, turn, stage.name, player_name
        );

        if stage.name == StageName::Plan && self.day > 0 {
            self.inject_planning_context(&player_name).await?;
        }

        // Stage prompt: sourced from the store for store-backed stages,
        // otherwise rendered over whatever the previous step carried over.
        // Failures here are configuration errors and are not retried.
        let prompt_data = if stage.reads_store {
            let key = RecordKey::try_from(stage.name)
                .map_err(|e| SceneError::Config(e.to_string()))?;
            self.ports.store.fetch(key, self.home).await?
        } else {
            carried.unwrap_or(Value::Null)
        };
        let prompt = self
            .ports
            .prompts
            .render(PromptKey::Stage(stage.name), &prompt_data)?;
        self.append_message(Message::system(prompt, player_name.clone(), turn));

        // Planning sees the full history; every other stage only its turn.
        let include_history = stage.name == StageName::Plan;
        let observation = self.pool.observation(&player_name, turn, include_history);
        debug!(
            "observation for '{}' ({} bytes): {}",
            player_name,
            observation.len(),
            truncate_str(&observation, 200)
        );

        let record_key = if stage.writes_store {
            Some(
                RecordKey::try_from(stage.name)
                    .map_err(|e| SceneError::Config(e.to_string()))?,
            )
        } else {
            None
        };

        // The invoke/persist/decode unit is retried with an unchanged
        // observation until it succeeds or the budget is spent.
        let store = Arc::clone(&self.ports.store);
        let home = self.home;
        let (raw, parsed) = with_retry(
            self.params.invalid_step_retry,
            stage.name.as_str(),
            move || {
                let player = Arc::clone(&player);
                let store = Arc::clone(&store);
                let observation = observation.clone();
                async move {
                    let raw = player
                        .act(&observation)
                        .await
                        .map_err(StepFault::transient)?;

                    let parsed = match record_key {
                        Some(key) => {
                            store
                                .store(&raw, key, home)
                                .await
                                .map_err(StepFault::transient)?;
                            let value = serde_json::from_str::<Value>(&raw).map_err(|e| {
                                StepFault::transient(format!(
                                    "output for '{}' is not valid JSON: {}",
                                    key, e
                                ))
                            })?;
                            Some(value)
                        }
                        None => None,
                    };

                    Ok((raw, parsed))
                }
            },
        )
        .await?;

        self.append_message(Message::from_agent(player_name, raw, turn));

        self.pointers.reset_player();
        self.pointers.advance_stage(self.pipeline.len());

        Ok(parsed)
    }

    async fn terminal_action(&mut self) -> Result<(), SceneError> {
        // Resolve the venue identity from the freshly persisted basic info
        // and register it; idempotent after the first day.
        let basic_info = self.ports.store.fetch(RecordKey::BasicInfo, self.home).await?;
        let first = basic_info.get(0).unwrap_or(&basic_info);
        let venue = first
            .get("name")
            .and_then(Value::as_str)
            .and_then(AgentName::try_new)
            .ok_or_else(|| StoreError::Malformed {
                key: RecordKey::BasicInfo,
                reason: "missing venue 'name'".to_string(),
            })?;
        write_directory(&self.directory).register(venue.clone(), self.home);

        // Collapse the day's final output into a day-prefixed summary,
        // discarding turn-level detail from the visible surface.
        let last = self.pool.last_message()?;
        let summary = format!("Day{} summary: {}", self.day, last.content);
        self.pool.compress_last_turn(summary)?;
        if let Ok(compressed) = self.pool.last_message() {
            self.ports.transcript.record(TranscriptEvent::compressed(compressed));
        }

        info!("day {} closed for venue '{}' at {}", self.day, venue, self.home);

        self.day += 1;
        self.pointers.rollover();
        self.pointers.reset_player();

        Ok(())
    }
}

/// Lock the run directory for writing, recovering from poisoning.
pub fn write_directory(directory: &SharedDirectory) -> RwLockWriteGuard<'_, VenueDirectory> {
    directory.write().unwrap_or_else(|e| e.into_inner())
}

/// Lock the run directory for reading, recovering from poisoning.
pub fn read_directory(directory: &SharedDirectory) -> RwLockReadGuard<'_, VenueDirectory> {
    directory.read().unwrap_or_else(|e| e.into_inner())
}
