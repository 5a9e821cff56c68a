//! Pipeline stage descriptors
//!
//! The ordered stage sequence of a scene is fixed configuration supplied at
//! construction, never derived at runtime. Stage names form a closed
//! enumeration so that prompt templates and store records can be resolved
//! up front instead of through string lookups at call time.

use serde::{Deserialize, Serialize};

/// Known pipeline stages of the day-cycle scene (closed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Plan,
    BasicInfo,
    Menu,
    Chef,
    Ads,
    Summary,
}

impl StageName {
    /// All stages, in canonical pipeline order.
    pub const ALL: [StageName; 6] = [
        StageName::Plan,
        StageName::BasicInfo,
        StageName::Menu,
        StageName::Chef,
        StageName::Ads,
        StageName::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageName::Plan => "plan",
            StageName::BasicInfo => "basic_info",
            StageName::Menu => "menu",
            StageName::Chef => "chef",
            StageName::Ads => "ads",
            StageName::Summary => "summary",
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor for one stage of work within a scene's pipeline
///
/// `reads_store` sources the stage's prompt data from the external store;
/// `writes_store` persists the player's output there after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: StageName,
    #[serde(default)]
    pub reads_store: bool,
    #[serde(default)]
    pub writes_store: bool,
}

impl Stage {
    pub fn new(name: StageName, reads_store: bool, writes_store: bool) -> Self {
        Self {
            name,
            reads_store,
            writes_store,
        }
    }

    /// A stage that neither reads nor writes the external store.
    pub fn detached(name: StageName) -> Self {
        Self::new(name, false, false)
    }

    /// A stage that both sources its prompt from and persists its output to
    /// the external store.
    pub fn persisted(name: StageName) -> Self {
        Self::new(name, true, true)
    }
}

/// The canonical day-cycle pipeline configuration.
pub fn day_cycle_pipeline() -> Vec<Stage> {
    vec![
        Stage::detached(StageName::Plan),
        Stage::persisted(StageName::BasicInfo),
        Stage::persisted(StageName::Menu),
        Stage::persisted(StageName::Chef),
        Stage::persisted(StageName::Ads),
        Stage::detached(StageName::Summary),
    ]
}
