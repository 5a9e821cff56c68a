//! Daybook windowing policy for the planning stage
//!
//! A daybook is the persisted per-day record of one venue. When planning a
//! new day, the agent is shown a bounded window of its recent daybook
//! entries with the `rival_info` field stripped; only the most recent day's
//! rival information is supplied, through a dedicated context field. The
//! windowing bounds prompt size; the stripping keeps an agent from seeing
//! its own historical relative-position data beyond the latest day.

use serde_json::Value;

/// Field carrying an agent's relative-position data in a daybook entry.
pub const RIVAL_INFO_FIELD: &str = "rival_info";

/// The planning-stage view over a venue's daybook history.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningWindow {
    /// At most `window` most-recent entries, each with `rival_info` removed.
    pub entries: Vec<Value>,
    /// `rival_info` of the most recent entry, `Null` when absent.
    pub rival_info: Value,
}

/// Apply the planning window policy to raw daybook records.
///
/// Keeps the last `window` entries in order, strips [`RIVAL_INFO_FIELD`]
/// from every shown entry, and extracts the most recent entry's rival info
/// before stripping. An empty input produces an empty window.
pub fn planning_window(entries: &[Value], window: usize) -> PlanningWindow {
    let rival_info = entries
        .last()
        .and_then(|e| e.get(RIVAL_INFO_FIELD))
        .cloned()
        .unwrap_or(Value::Null);

    let start = entries.len().saturating_sub(window);
    let entries = entries[start..]
        .iter()
        .map(|entry| match entry {
            Value::Object(map) => {
                let filtered: serde_json::Map<String, Value> = map
                    .iter()
                    .filter(|(k, _)| k.as_str() != RIVAL_INFO_FIELD)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Value::Object(filtered)
            }
            other => other.clone(),
        })
        .collect();

    PlanningWindow { entries, rival_info }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(day: u64) -> Value {
        json!({
            "day": day,
            "income": day * 100,
            "rival_info": format!("rivals on day {}", day),
        })
    }

    #[test]
    fn test_window_bounds_entry_count() {
        let entries: Vec<Value> = (0..8).map(entry).collect();
        let window = planning_window(&entries, 5);

        assert_eq!(window.entries.len(), 5);
        assert_eq!(window.entries[0]["day"], 3);
        assert_eq!(window.entries[4]["day"], 7);
    }

    #[test]
    fn test_short_history_kept_whole() {
        let entries: Vec<Value> = (0..3).map(entry).collect();
        let window = planning_window(&entries, 5);
        assert_eq!(window.entries.len(), 3);
    }

    #[test]
    fn test_rival_info_stripped_from_all_shown_entries() {
        let entries: Vec<Value> = (0..8).map(entry).collect();
        let window = planning_window(&entries, 5);

        for shown in &window.entries {
            assert!(shown.get(RIVAL_INFO_FIELD).is_none());
        }
        // The latest day's rival info travels only via the dedicated field
        assert_eq!(window.rival_info, json!("rivals on day 7"));
    }

    #[test]
    fn test_other_fields_survive_stripping() {
        let entries = vec![entry(2)];
        let window = planning_window(&entries, 5);
        assert_eq!(window.entries[0]["income"], 200);
    }

    #[test]
    fn test_empty_history() {
        let window = planning_window(&[], 5);
        assert!(window.entries.is_empty());
        assert_eq!(window.rival_info, Value::Null);
    }

    #[test]
    fn test_entry_without_rival_info() {
        let entries = vec![json!({"day": 0, "income": 50})];
        let window = planning_window(&entries, 5);
        assert_eq!(window.rival_info, Value::Null);
        assert_eq!(window.entries[0]["income"], 50);
    }
}
