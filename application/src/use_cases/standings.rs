//! Cross-venue standings aggregation
//!
//! A pure read-and-reshape over the external store: for every registered
//! address, collect the venue's current offering (rendered through the
//! `today_offering` template) and its score data, keyed by the registered
//! display name. Used to hand a day's results off to a downstream scene;
//! holds no mutable state of its own.

use super::run_scene::SceneError;
use crate::ports::prompt_catalog::{PromptCatalog, PromptKey};
use crate::ports::venue_store::{RecordKey, VenueStore};
use agora_domain::VenueDirectory;
use futures::future::join_all;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// One venue's entry in the hand-off payload.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Standing {
    /// Human-readable rendering of the venue's current offering.
    pub today_offering: String,
    /// Score data exactly as the store holds it.
    pub dish_score: Value,
}

/// Collect the current offering and score of every registered venue.
pub async fn collect_standings(
    store: &dyn VenueStore,
    prompts: &dyn PromptCatalog,
    directory: &VenueDirectory,
) -> Result<BTreeMap<String, Standing>, SceneError> {
    let addresses = directory.addresses();
    debug!("collecting standings across {} addresses", addresses.len());

    let fetches = addresses.iter().map(|&addr| async move {
        let show = store.fetch(RecordKey::Show, addr).await?;
        let today_offering = prompts.render(PromptKey::TodayOffering, &show)?;
        let dish_score = store.fetch(RecordKey::Score, addr).await?;
        Ok::<_, SceneError>((addr, today_offering, dish_score))
    });

    let mut standings = BTreeMap::new();
    for result in join_all(fetches).await {
        let (addr, today_offering, dish_score) = result?;
        // addresses() comes from the same maps, so the reverse lookup holds
        if let Some(name) = directory.name_of(addr) {
            standings.insert(
                name.to_string(),
                Standing {
                    today_offering,
                    dish_score,
                },
            );
        }
    }

    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryStore, StaticCatalog};
    use agora_domain::{AgentName, StoreAddress};
    use serde_json::json;

    #[test]
    fn test_standing_serializes_fields() {
        let standing = Standing {
            today_offering: "soup".to_string(),
            dish_score: json!({"soup": 4.5}),
        };
        let value = serde_json::to_value(&standing).unwrap();
        assert_eq!(value["today_offering"], "soup");
        assert_eq!(value["dish_score"]["soup"], 4.5);
    }

    #[tokio::test]
    async fn test_collects_per_registered_venue() {
        let mut directory = VenueDirectory::new();
        directory.register(AgentName::new("Rustaurant"), StoreAddress(9000));
        directory.register(AgentName::new("Borrow Bistro"), StoreAddress(9001));

        let store = InMemoryStore::new();
        store.seed(RecordKey::Show, StoreAddress(9000), json!({"menu": ["stew"]}));
        store.seed(RecordKey::Score, StoreAddress(9000), json!({"stew": 4.2}));
        store.seed(RecordKey::Show, StoreAddress(9001), json!({"menu": ["pie"]}));
        store.seed(RecordKey::Score, StoreAddress(9001), json!({"pie": 3.9}));

        let standings = collect_standings(&store, &StaticCatalog, &directory)
            .await
            .unwrap();

        assert_eq!(standings.len(), 2);
        let rustaurant = &standings["Rustaurant"];
        assert!(rustaurant.today_offering.contains("stew"));
        assert_eq!(rustaurant.dish_score, json!({"stew": 4.2}));
        let bistro = &standings["Borrow Bistro"];
        assert_eq!(bistro.dish_score, json!({"pie": 3.9}));
    }

    #[tokio::test]
    async fn test_missing_show_data_propagates() {
        let mut directory = VenueDirectory::new();
        directory.register(AgentName::new("Rustaurant"), StoreAddress(9000));

        let store = InMemoryStore::new();
        let err = collect_standings(&store, &StaticCatalog, &directory)
            .await
            .unwrap_err();
        assert!(matches!(err, SceneError::Store(_)));
    }
}
