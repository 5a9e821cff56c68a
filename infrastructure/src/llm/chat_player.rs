//! Chat-completion player adapter
//!
//! Implements the [`Player`] port over an OpenAI-compatible HTTP endpoint.
//! Each invocation is one blocking round-trip: persona system prompt plus
//! the observation as the user message. The adapter does no retrying of its
//! own; the scene engine owns the retry budget.

use super::protocol::{ChatMessage, ChatRequest, ChatResponse};
use agora_application::{Player, PlayerError};
use agora_domain::{AgentName, truncate_str};
use async_trait::async_trait;
use tracing::debug;

/// A roster player backed by a chat-completion model.
pub struct ChatPlayer {
    name: AgentName,
    persona: String,
    model: String,
    api_base: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl ChatPlayer {
    pub fn new(
        name: impl Into<String>,
        persona: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            name: AgentName::new(name),
            persona: persona.into(),
            model: model.into(),
            api_base: api_base.into(),
            api_key,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Player for ChatPlayer {
    fn name(&self) -> &AgentName {
        &self.name
    }

    async fn act(&self, observation: &str) -> Result<String, PlayerError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(&self.persona),
                ChatMessage::user(observation),
            ],
            temperature: None,
        };

        debug!(
            "invoking model '{}' for player '{}' ({} byte observation)",
            self.model,
            self.name,
            observation.len()
        );

        let mut builder = self.http.post(self.endpoint()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| PlayerError::Invocation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlayerError::Invocation(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_str(&body, 300)
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| PlayerError::Invocation(format!("malformed completion: {}", e)))?;

        match parsed.first_content() {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(PlayerError::EmptyCompletion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let player = ChatPlayer::new("p", "persona", "m", "http://localhost:8080/v1/", None);
        assert_eq!(player.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_player_exposes_roster_name() {
        let player = ChatPlayer::new("player-1", "persona", "m", "http://x", None);
        assert_eq!(player.name().as_str(), "player-1");
    }
}
