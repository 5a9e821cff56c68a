//! Agent name value object

use serde::{Deserialize, Serialize};

/// Display name of an agent or venue (Value Object)
///
/// Used both for roster players and for venue identities resolved from
/// persisted data. Names are compared verbatim; construction trims
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    /// Create a new agent name
    ///
    /// # Panics
    /// Panics if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        assert!(!trimmed.is_empty(), "agent name cannot be empty");
        Self(trimmed.to_string())
    }

    /// Try to create an agent name, returning None if invalid
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentName {
    fn from(s: &str) -> Self {
        AgentName::new(s)
    }
}

impl From<String> for AgentName {
    fn from(s: String) -> Self {
        AgentName::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_creation() {
        let n = AgentName::new("Rustaurant");
        assert_eq!(n.as_str(), "Rustaurant");
    }

    #[test]
    fn test_name_trims_whitespace() {
        let n = AgentName::new("  Alice  ");
        assert_eq!(n.as_str(), "Alice");
    }

    #[test]
    #[should_panic]
    fn test_empty_name_panics() {
        AgentName::new("   ");
    }

    #[test]
    fn test_try_new() {
        assert!(AgentName::try_new("").is_none());
        assert!(AgentName::try_new("Bob").is_some());
    }
}
