//! Shared in-memory port doubles for engine tests.

use crate::ports::metric_table::MetricTable;
use crate::ports::player::{Player, PlayerError};
use crate::ports::prompt_catalog::{PromptCatalog, PromptError, PromptKey};
use crate::ports::transcript::{TranscriptEvent, TranscriptLog};
use crate::ports::venue_store::{RecordKey, StoreError, VenueStore};
use agora_domain::{AgentName, StoreAddress};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Player that replays a fixed script of outcomes and records every
/// observation it was shown.
pub(crate) struct ScriptedPlayer {
    name: AgentName,
    script: Mutex<VecDeque<Result<String, String>>>,
    observations: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedPlayer {
    pub fn new(name: &str, script: Vec<Result<String, String>>) -> Self {
        Self {
            name: AgentName::new(name),
            script: Mutex::new(script.into()),
            observations: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn observations(&self) -> Vec<String> {
        self.observations.lock().unwrap().clone()
    }
}

#[async_trait]
impl Player for ScriptedPlayer {
    fn name(&self) -> &AgentName {
        &self.name
    }

    async fn act(&self, observation: &str) -> Result<String, PlayerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.observations.lock().unwrap().push(observation.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(output)) => Ok(output),
            Some(Err(reason)) => Err(PlayerError::Invocation(reason)),
            None => Err(PlayerError::Invocation("script exhausted".to_string())),
        }
    }
}

/// Store double: seeded records, write journal, optional injected faults.
/// Successful writes also update the readable record (decoded JSON when the
/// payload parses, the raw string otherwise).
#[derive(Default)]
pub(crate) struct InMemoryStore {
    records: Mutex<HashMap<(RecordKey, StoreAddress), Value>>,
    writes: Mutex<Vec<(RecordKey, StoreAddress, String)>>,
    failing_stores: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, key: RecordKey, addr: StoreAddress, value: Value) {
        self.records.lock().unwrap().insert((key, addr), value);
    }

    pub fn record(&self, key: RecordKey, addr: StoreAddress) -> Option<Value> {
        self.records.lock().unwrap().get(&(key, addr)).cloned()
    }

    pub fn writes(&self) -> Vec<(RecordKey, StoreAddress, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Fail the next `n` store() calls with a transient request error.
    pub fn fail_next_stores(&self, n: usize) {
        self.failing_stores.store(n, Ordering::SeqCst);
    }
}

#[async_trait]
impl VenueStore for InMemoryStore {
    async fn fetch(&self, key: RecordKey, addr: StoreAddress) -> Result<Value, StoreError> {
        self.record(key, addr).ok_or(StoreError::Request {
            key,
            addr,
            reason: "no record".to_string(),
        })
    }

    async fn store(
        &self,
        payload: &str,
        key: RecordKey,
        addr: StoreAddress,
    ) -> Result<(), StoreError> {
        let remaining = self.failing_stores.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_stores.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::Request {
                key,
                addr,
                reason: "injected store fault".to_string(),
            });
        }

        self.writes
            .lock()
            .unwrap()
            .push((key, addr, payload.to_string()));
        let value = serde_json::from_str(payload)
            .unwrap_or_else(|_| Value::String(payload.to_string()));
        self.seed(key, addr, value);
        Ok(())
    }
}

/// Catalog double: renders every known key as `[key] data`.
pub(crate) struct StaticCatalog;

impl PromptCatalog for StaticCatalog {
    fn render(&self, key: PromptKey, data: &Value) -> Result<String, PromptError> {
        Ok(format!("[{}] {}", key, data))
    }
}

/// Transcript double recording (event type, payload) pairs.
#[derive(Default)]
pub(crate) struct RecordingTranscript {
    events: Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingTranscript {
    pub fn events(&self) -> Vec<(&'static str, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl TranscriptLog for RecordingTranscript {
    fn record(&self, event: TranscriptEvent) {
        self.events.lock().unwrap().push((event.event_type, event.payload));
    }
}

/// Metric table double collecting appended columns.
#[derive(Default)]
pub(crate) struct CollectingTable {
    columns: Mutex<Vec<(String, String, BTreeMap<String, Value>)>>,
}

impl CollectingTable {
    pub fn columns(&self) -> Vec<(String, String, BTreeMap<String, Value>)> {
        self.columns.lock().unwrap().clone()
    }
}

impl MetricTable for CollectingTable {
    fn append_column(&self, table: &str, column: &str, values: &BTreeMap<String, Value>) {
        self.columns
            .lock()
            .unwrap()
            .push((table.to_string(), column.to_string(), values.clone()));
    }
}
