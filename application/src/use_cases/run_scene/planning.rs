//! Planning-stage context assembly
//!
//! On every day after the first, the planning stage is preceded by a
//! daybook context injection: a bounded window of the venue's recent
//! daybook records (rival info stripped), the latest external comment, the
//! most recent day's rival information, and the current menu. The same
//! fetch also feeds the side-channel metric tables.

use super::SceneError;
use crate::ports::venue_store::{RecordKey, StoreError, VenueStore};
use agora_domain::{StoreAddress, planning_window};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Everything the daybook injection needs, gathered in one pass.
#[derive(Debug)]
pub(crate) struct PlanningContext {
    /// Data rendered into the daybook template.
    pub prompt_data: Value,
    /// The most recent windowed daybook entry, flattened for the metric
    /// table. None when the entry is not an object.
    pub latest_daybook_rows: Option<BTreeMap<String, Value>>,
    /// The current menu as a single JSON-encoded table row.
    pub menu_rows: BTreeMap<String, Value>,
}

pub(crate) async fn gather(
    store: &dyn VenueStore,
    home: StoreAddress,
    day: u64,
    window: usize,
) -> Result<PlanningContext, SceneError> {
    let daybook = store.fetch(RecordKey::Daybook, home).await?;
    let entries = match daybook {
        Value::Array(entries) => entries,
        _ => {
            return Err(StoreError::Malformed {
                key: RecordKey::Daybook,
                reason: "expected an array of daybook entries".to_string(),
            }
            .into());
        }
    };

    let windowed = planning_window(&entries, window);
    let comment = store.fetch(RecordKey::LastComment, home).await?;
    let menu = store.fetch(RecordKey::Menu, home).await?;

    let latest_daybook_rows = windowed
        .entries
        .last()
        .and_then(Value::as_object)
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect());

    let menu_rows = BTreeMap::from([("menu".to_string(), Value::String(menu.to_string()))]);

    let prompt_data = json!({
        "day": day,
        "daybook": windowed.entries,
        "comment": comment,
        "rival_info": windowed.rival_info,
        "menu": menu,
    });

    Ok(PlanningContext {
        prompt_data,
        latest_daybook_rows,
        menu_rows,
    })
}
