//! Engine tuning parameters.

use serde::{Deserialize, Serialize};

/// Fixed budgets of the scene engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Attempts allowed for one "invoke player, parse output" unit before
    /// the run aborts.
    pub invalid_step_retry: usize,
    /// Maximum daybook entries presented to the planning stage.
    pub daybook_window: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            invalid_step_retry: 3,
            daybook_window: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = EngineParams::default();
        assert_eq!(params.invalid_step_retry, 3);
        assert_eq!(params.daybook_window, 5);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let params: EngineParams = serde_json::from_str(r#"{"invalid_step_retry": 5}"#).unwrap();
        assert_eq!(params.invalid_step_retry, 5);
        assert_eq!(params.daybook_window, 5);
    }
}
