//! External per-venue store port
//!
//! The store is keyed by a per-venue numeric address plus a record key. The
//! engine fetches structured data to source prompts and persists raw stage
//! outputs; it assumes sequential, idempotent-retry access and provides no
//! transaction guarantee beyond its own retry bound.

use agora_domain::{StageName, StoreAddress};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Closed set of record kinds held by the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKey {
    BasicInfo,
    Menu,
    Chef,
    Ads,
    Daybook,
    LastComment,
    Show,
    Score,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::BasicInfo => "basic_info",
            RecordKey::Menu => "menu",
            RecordKey::Chef => "chef",
            RecordKey::Ads => "ads",
            RecordKey::Daybook => "daybook",
            RecordKey::LastComment => "last_comment",
            RecordKey::Show => "show",
            RecordKey::Score => "score",
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stages that neither read nor write the store have no record key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stage '{0}' has no store record")]
pub struct NoRecordForStage(pub StageName);

impl TryFrom<StageName> for RecordKey {
    type Error = NoRecordForStage;

    fn try_from(stage: StageName) -> Result<Self, Self::Error> {
        match stage {
            StageName::BasicInfo => Ok(RecordKey::BasicInfo),
            StageName::Menu => Ok(RecordKey::Menu),
            StageName::Chef => Ok(RecordKey::Chef),
            StageName::Ads => Ok(RecordKey::Ads),
            StageName::Plan | StageName::Summary => Err(NoRecordForStage(stage)),
        }
    }
}

/// Errors from the external store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request for '{key}' at {addr} failed: {reason}")]
    Request {
        key: RecordKey,
        addr: StoreAddress,
        reason: String,
    },

    #[error("store returned malformed data for '{key}': {reason}")]
    Malformed { key: RecordKey, reason: String },
}

/// The per-venue persistence collaborator.
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Fetch the structured record stored under `key` for `addr`.
    async fn fetch(&self, key: RecordKey, addr: StoreAddress) -> Result<Value, StoreError>;

    /// Persist a raw stage output under `key` for `addr`.
    async fn store(&self, payload: &str, key: RecordKey, addr: StoreAddress)
    -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key_from_persisting_stage() {
        assert_eq!(RecordKey::try_from(StageName::Menu), Ok(RecordKey::Menu));
        assert_eq!(RecordKey::try_from(StageName::Ads), Ok(RecordKey::Ads));
    }

    #[test]
    fn test_detached_stages_have_no_record() {
        assert!(RecordKey::try_from(StageName::Plan).is_err());
        assert!(RecordKey::try_from(StageName::Summary).is_err());
    }

    #[test]
    fn test_record_key_serde() {
        let json = serde_json::to_string(&RecordKey::LastComment).unwrap();
        assert_eq!(json, "\"last_comment\"");
    }
}
