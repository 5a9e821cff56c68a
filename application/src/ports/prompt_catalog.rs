//! Prompt catalog port
//!
//! Templates are addressed by a closed enumeration of known keys, so an
//! adapter can resolve the full set at construction time and fail fast on a
//! missing template instead of deferring to a string lookup at call time.
//! A missing or broken template is a setup defect: fatal, never retried.

use agora_domain::StageName;
use serde_json::Value;
use thiserror::Error;

/// Closed set of prompt templates the day-cycle scene requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    /// The per-stage prompt of a pipeline stage.
    Stage(StageName),
    /// Historical context injected before planning on later days.
    Daybook,
    /// Rendering of a venue's current offering for the standings hand-off.
    TodayOffering,
}

impl PromptKey {
    /// Every key an adapter must resolve for the day-cycle scene.
    pub const ALL: [PromptKey; 8] = [
        PromptKey::Stage(StageName::Plan),
        PromptKey::Stage(StageName::BasicInfo),
        PromptKey::Stage(StageName::Menu),
        PromptKey::Stage(StageName::Chef),
        PromptKey::Stage(StageName::Ads),
        PromptKey::Stage(StageName::Summary),
        PromptKey::Daybook,
        PromptKey::TodayOffering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKey::Stage(stage) => stage.as_str(),
            PromptKey::Daybook => "daybook",
            PromptKey::TodayOffering => "today_offering",
        }
    }
}

impl std::fmt::Display for PromptKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration errors from the template collaborator.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("no template configured for '{0}'")]
    MissingTemplate(PromptKey),

    #[error("template '{key}' failed to render: {reason}")]
    Render { key: PromptKey, reason: String },
}

/// Renders a (scene, step) template against structured data.
pub trait PromptCatalog: Send + Sync {
    fn render(&self, key: PromptKey, data: &Value) -> Result<String, PromptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(PromptKey::Stage(StageName::BasicInfo).as_str(), "basic_info");
        assert_eq!(PromptKey::Daybook.as_str(), "daybook");
        assert_eq!(PromptKey::TodayOffering.as_str(), "today_offering");
    }

    #[test]
    fn test_all_covers_every_stage() {
        for stage in StageName::ALL {
            assert!(PromptKey::ALL.contains(&PromptKey::Stage(stage)));
        }
        assert_eq!(PromptKey::ALL.len(), StageName::ALL.len() + 2);
    }
}
